use crate::world::id_allocator::ActorIdAllocator;

mod sealed {
    pub trait Sealed {}
}

/// Marks what a Scene is allowed to do; only `Master` allocates ids
pub trait SceneRole: sealed::Sealed {
    const NAME: &'static str;
}

/// The node that allocates actor ids and originates creations and removals
#[derive(Debug, Default)]
pub struct Master {
    pub(crate) allocator: ActorIdAllocator,
}

impl Master {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allocator(allocator: ActorIdAllocator) -> Self {
        Self { allocator }
    }
}

/// A node mirroring master state through applied diffs
#[derive(Debug, Default)]
pub struct Replica;

impl sealed::Sealed for Master {}
impl sealed::Sealed for Replica {}

impl SceneRole for Master {
    const NAME: &'static str = "master";
}

impl SceneRole for Replica {
    const NAME: &'static str = "replica";
}
