use std::collections::{hash_map, HashMap, VecDeque};

use crate::types::Revision;

use super::{actor::Actor, actor_id::ActorId};

/// Live actors keyed by id, plus a bounded memory of recent deletions.
///
/// Deleted actors are removed outright; only their id and final revision are
/// remembered so a replayed stale diff cannot resurrect them.
pub struct ActorStore {
    actors: HashMap<ActorId, Actor>,
    tombstones: HashMap<ActorId, Revision>,
    tombstone_order: VecDeque<ActorId>,
    tombstone_capacity: usize,
}

impl ActorStore {
    pub fn new(tombstone_capacity: usize) -> Self {
        Self {
            actors: HashMap::new(),
            tombstones: HashMap::new(),
            tombstone_order: VecDeque::new(),
            tombstone_capacity,
        }
    }

    pub fn contains(&self, actor_id: &ActorId) -> bool {
        self.actors.contains_key(actor_id)
    }

    pub fn get(&self, actor_id: &ActorId) -> Option<&Actor> {
        self.actors.get(actor_id)
    }

    pub fn get_mut(&mut self, actor_id: &ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(actor_id)
    }

    /// Inserts a new actor, forgetting any tombstone held for its id
    pub fn insert(&mut self, actor: Actor) {
        self.tombstones.remove(&actor.actor_id);
        self.actors.insert(actor.actor_id.clone(), actor);
    }

    /// Removes the actor and remembers the revision it died at
    pub fn remove(&mut self, actor_id: &ActorId, revision: Revision) -> Option<Actor> {
        let actor = self.actors.remove(actor_id)?;
        self.remember_tombstone(actor_id.clone(), revision);
        Some(actor)
    }

    fn remember_tombstone(&mut self, actor_id: ActorId, revision: Revision) {
        if self.tombstone_capacity == 0 {
            return;
        }
        if self.tombstones.insert(actor_id.clone(), revision).is_none() {
            self.tombstone_order.push_back(actor_id);
        }
        while self.tombstones.len() > self.tombstone_capacity {
            let Some(oldest) = self.tombstone_order.pop_front() else {
                break;
            };
            self.tombstones.remove(&oldest);
        }
        // ids recreated since their deletion leave stale entries in the queue
        if self.tombstone_order.len() > self.tombstone_capacity.saturating_mul(2) {
            let tombstones = &self.tombstones;
            self.tombstone_order.retain(|id| tombstones.contains_key(id));
        }
    }

    pub fn tombstone(&self, actor_id: &ActorId) -> Option<Revision> {
        self.tombstones.get(actor_id).copied()
    }

    pub fn tombstone_count(&self) -> usize {
        self.tombstones.len()
    }

    pub fn ids(&self) -> Vec<ActorId> {
        self.actors.keys().cloned().collect()
    }

    pub fn iter(&self) -> hash_map::Values<'_, ActorId, Actor> {
        self.actors.values()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
