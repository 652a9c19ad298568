use std::collections::BTreeMap;

use crate::types::ProtocolVersion;

use super::{actor_id::ActorId, update::Update};

/// A versioned batch of per-actor partial updates, the unit exchanged between nodes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diff {
    pub version: ProtocolVersion,
    pub updates: BTreeMap<ActorId, Update>,
}

impl Diff {
    pub fn new(version: ProtocolVersion) -> Self {
        Self {
            version,
            updates: BTreeMap::new(),
        }
    }

    pub fn with_updates(
        version: ProtocolVersion,
        updates: impl IntoIterator<Item = (ActorId, Update)>,
    ) -> Self {
        Self {
            version,
            updates: updates.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, actor_id: ActorId, update: Update) {
        self.updates.insert(actor_id, update);
    }

    pub fn get(&self, actor_id: &ActorId) -> Option<&Update> {
        self.updates.get(actor_id)
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// An encoded diff ready for the transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializedDiff {
    /// Number of actor entries in the encoded diff
    pub count: usize,
    pub data: Vec<u8>,
}
