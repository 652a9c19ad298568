use log::trace;

use super::actor_id::ActorId;

/// Hands out densely numbered actor ids. Only a master scene owns one.
///
/// The counter is never recycled; a `u64` outlives any realistic number of
/// allocations.
#[derive(Debug)]
pub struct ActorIdAllocator {
    next_index: u64,
}

impl ActorIdAllocator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Resume allocation after `next_index - 1`, e.g. for a restarted master
    pub fn starting_at(next_index: u64) -> Self {
        Self { next_index }
    }

    pub fn next_actor_id(&mut self) -> ActorId {
        let actor_id = ActorId::from_index(self.next_index);
        self.next_index += 1;
        trace!("ActorIdAllocator: allocated {}", actor_id);
        actor_id
    }

    pub fn peek_next_index(&self) -> u64 {
        self.next_index
    }
}

impl Default for ActorIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
