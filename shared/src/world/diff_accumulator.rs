use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

use crate::types::Revision;

use super::{actor_id::ActorId, update::Update};

/// Identifies a downstream consumer that drains its own copy of the pending diff
pub type ConsumerKey = u64;

type PendingUpdates = BTreeMap<ActorId, Update>;

/// Records, per actor, every field changed since the last drain.
///
/// The default buffer serves a single consumer: draining it is destructive.
/// Consumers that must each see every change register their own buffer,
/// which is fed the same records and drained independently.
#[derive(Default)]
pub struct DiffAccumulator {
    pending: PendingUpdates,
    consumers: HashMap<ConsumerKey, PendingUpdates>,
}

impl DiffAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    // Recording

    /// A creation is always fully described, replacing anything pending
    pub fn record_creation(&mut self, actor_id: &ActorId, full_update: Update) {
        for buffer in self.buffers_mut() {
            buffer.insert(actor_id.clone(), full_update.clone());
        }
    }

    /// Merges the changed fields into the pending entry for the actor
    pub fn record_update(&mut self, actor_id: &ActorId, update: &Update) {
        for buffer in self.buffers_mut() {
            buffer
                .entry(actor_id.clone())
                .and_modify(|pending| pending.merge(update))
                .or_insert_with(|| update.clone());
        }
    }

    /// A deletion supersedes any pending field changes for the actor.
    /// The tombstone keeps the deletion revision so receivers can refuse
    /// older updates that arrive after it.
    pub fn record_deletion(&mut self, actor_id: &ActorId, revision: Revision) {
        let tombstone = Update::tombstone().with_revision(revision);
        for buffer in self.buffers_mut() {
            buffer.insert(actor_id.clone(), tombstone.clone());
        }
    }

    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut PendingUpdates> {
        std::iter::once(&mut self.pending).chain(self.consumers.values_mut())
    }

    // Draining

    pub fn drain(&mut self) -> PendingUpdates {
        let drained = std::mem::take(&mut self.pending);
        debug!("DiffAccumulator: drained {} pending entries", drained.len());
        drained
    }

    pub fn pending(&self) -> &PendingUpdates {
        &self.pending
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    // Consumers

    /// Returns false if the consumer was already registered
    pub fn register_consumer(&mut self, consumer: ConsumerKey) -> bool {
        if self.consumers.contains_key(&consumer) {
            warn!("DiffAccumulator: consumer {} registered more than once", consumer);
            return false;
        }
        self.consumers.insert(consumer, PendingUpdates::new());
        true
    }

    pub fn deregister_consumer(&mut self, consumer: ConsumerKey) -> bool {
        self.consumers.remove(&consumer).is_some()
    }

    pub fn has_consumer(&self, consumer: ConsumerKey) -> bool {
        self.consumers.contains_key(&consumer)
    }

    /// `None` if the consumer was never registered
    pub fn drain_consumer(&mut self, consumer: ConsumerKey) -> Option<PendingUpdates> {
        let buffer = self.consumers.get_mut(&consumer)?;
        Some(std::mem::take(buffer))
    }
}
