use crate::world::{
    actor::Actor,
    actor_id::ActorId,
    diff::{Diff, SerializedDiff},
    observers::{ActorObserver, ObserverHandle},
    update::Update,
};

use super::{
    error::SceneError,
    role::{Master, SceneRole},
    scene::Scene,
};

/// Capabilities every scene has, master or replica
pub trait ReplicatedScene {
    fn add_actor(&mut self, actor_id: &ActorId) -> bool;
    fn get_actor(&self, actor_id: &ActorId) -> Option<&Actor>;
    fn try_get_actor(&self, actor_id: &ActorId) -> Result<&Actor, SceneError>;
    fn actor_exists(&self, actor_id: &ActorId) -> bool;
    fn remove_actor(&mut self, actor_id: &ActorId) -> bool;
    fn update_actor(&mut self, actor_id: &ActorId, update: Update, invoke_callbacks: bool) -> bool;
    fn clear(&mut self);
    fn on_actor_update(&mut self, actor_id: &ActorId, observer: ActorObserver) -> ObserverHandle;
    fn unsubscribe(&mut self, handle: ObserverHandle) -> bool;
    fn retrieve_diff(&mut self, get_all: bool) -> Diff;
    fn retrieve_serialized_diff(&mut self, get_all: bool) -> Result<SerializedDiff, SceneError>;
    fn apply_diff(&mut self, diff: Diff, skip_id: Option<&ActorId>) -> Result<usize, SceneError>;
    fn apply_serialized_diff(
        &mut self,
        bytes: &[u8],
        skip_id: Option<&ActorId>,
    ) -> Result<usize, SceneError>;
}

/// Capabilities only the master has: it alone allocates ids
pub trait MasterScene: ReplicatedScene {
    fn next_actor_id(&mut self) -> ActorId;
    fn spawn_actor(&mut self, update: Update) -> ActorId;
}

impl<R: SceneRole> ReplicatedScene for Scene<R> {
    fn add_actor(&mut self, actor_id: &ActorId) -> bool {
        Scene::<R>::add_actor(self, actor_id)
    }

    fn get_actor(&self, actor_id: &ActorId) -> Option<&Actor> {
        Scene::<R>::get_actor(self, actor_id)
    }

    fn try_get_actor(&self, actor_id: &ActorId) -> Result<&Actor, SceneError> {
        Scene::<R>::try_get_actor(self, actor_id)
    }

    fn actor_exists(&self, actor_id: &ActorId) -> bool {
        Scene::<R>::actor_exists(self, actor_id)
    }

    fn remove_actor(&mut self, actor_id: &ActorId) -> bool {
        Scene::<R>::remove_actor(self, actor_id)
    }

    fn update_actor(&mut self, actor_id: &ActorId, update: Update, invoke_callbacks: bool) -> bool {
        Scene::<R>::update_actor(self, actor_id, update, invoke_callbacks)
    }

    fn clear(&mut self) {
        Scene::<R>::clear(self)
    }

    fn on_actor_update(&mut self, actor_id: &ActorId, observer: ActorObserver) -> ObserverHandle {
        Scene::<R>::on_actor_update(self, actor_id, observer)
    }

    fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        Scene::<R>::unsubscribe(self, handle)
    }

    fn retrieve_diff(&mut self, get_all: bool) -> Diff {
        Scene::<R>::retrieve_diff(self, get_all)
    }

    fn retrieve_serialized_diff(&mut self, get_all: bool) -> Result<SerializedDiff, SceneError> {
        Scene::<R>::retrieve_serialized_diff(self, get_all)
    }

    fn apply_diff(&mut self, diff: Diff, skip_id: Option<&ActorId>) -> Result<usize, SceneError> {
        Scene::<R>::apply_diff(self, diff, skip_id)
    }

    fn apply_serialized_diff(
        &mut self,
        bytes: &[u8],
        skip_id: Option<&ActorId>,
    ) -> Result<usize, SceneError> {
        Scene::<R>::apply_serialized_diff(self, bytes, skip_id)
    }
}

impl MasterScene for Scene<Master> {
    fn next_actor_id(&mut self) -> ActorId {
        Scene::<Master>::next_actor_id(self)
    }

    fn spawn_actor(&mut self, update: Update) -> ActorId {
        Scene::<Master>::spawn_actor(self, update)
    }
}
