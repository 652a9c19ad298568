use thiserror::Error;

use crate::types::Revision;

/// Why an update was not applied. Every variant is an expected outcome of
/// out-of-order or duplicated delivery, never a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateRejection {
    /// The incoming revision is not newer than the stored one
    #[error("Stale update for actor {actor_id}: revision {incoming} is not newer than {current}")]
    StaleUpdate {
        actor_id: String,
        current: Revision,
        incoming: Revision,
    },

    /// Deletion requested for an actor that does not exist
    #[error("Cannot delete actor {actor_id} - actor does not exist")]
    UnknownActorDeletion { actor_id: String },

    /// A replayed update for an actor that was deleted at a newer revision
    #[error("Actor {actor_id} was deleted at revision {deleted_at}; update at revision {incoming} ignored")]
    DeletedActor {
        actor_id: String,
        deleted_at: Revision,
        incoming: Revision,
    },
}
