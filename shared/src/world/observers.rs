use std::collections::HashMap;

use super::{actor::Actor, actor_id::ActorId, update::Update};

/// Callback invoked with the accepted update and the resulting actor,
/// or `None` when the update deleted it
pub type ActorObserver = Box<dyn FnMut(&Update, Option<&Actor>) + Send>;

/// Disposer for one registered observer, see `Scene::unsubscribe`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle {
    actor_id: ActorId,
    key: u64,
}

impl ObserverHandle {
    pub fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }
}

/// Per-actor observers, invoked in registration order
#[derive(Default)]
pub struct ObserverRegistry {
    observers: HashMap<ActorId, Vec<(u64, ActorObserver)>>,
    next_key: u64,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, actor_id: &ActorId, observer: ActorObserver) -> ObserverHandle {
        let key = self.next_key;
        self.next_key += 1;
        self.observers
            .entry(actor_id.clone())
            .or_default()
            .push((key, observer));
        ObserverHandle {
            actor_id: actor_id.clone(),
            key,
        }
    }

    /// Returns false if the handle was already disposed
    pub fn unregister(&mut self, handle: &ObserverHandle) -> bool {
        let Some(list) = self.observers.get_mut(&handle.actor_id) else {
            return false;
        };
        let before = list.len();
        list.retain(|(key, _)| *key != handle.key);
        let removed = list.len() != before;
        if list.is_empty() {
            self.observers.remove(&handle.actor_id);
        }
        removed
    }

    pub fn notify(&mut self, actor_id: &ActorId, update: &Update, actor: Option<&Actor>) {
        let Some(list) = self.observers.get_mut(actor_id) else {
            return;
        };
        for (_, observer) in list.iter_mut() {
            observer(update, actor);
        }
    }

    pub fn observer_count(&self, actor_id: &ActorId) -> usize {
        self.observers.get(actor_id).map_or(0, Vec::len)
    }
}
