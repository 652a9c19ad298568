use log::{debug, error, info, warn};

use crate::{
    codec::DiffCodec,
    compression::{decoder::Decoder, encoder::Encoder},
    world::{
        actor::Actor,
        actor_id::ActorId,
        actor_store::ActorStore,
        diff::{Diff, SerializedDiff},
        diff_accumulator::{ConsumerKey, DiffAccumulator},
        error::UpdateRejection,
        id_allocator::ActorIdAllocator,
        observers::{ObserverHandle, ObserverRegistry},
        update::Update,
    },
};

use super::{
    config::SceneConfig,
    error::SceneError,
    role::{Master, Replica, SceneRole},
};

/// The replicated actor scene of one node.
///
/// Owns the authoritative actor snapshot, the pending outgoing diff and the
/// per-actor observers. All operations are synchronous; a scene is driven by
/// one owner and exchanges state with other scenes only through diffs.
pub struct Scene<R: SceneRole = Replica> {
    role: R,
    config: SceneConfig,
    actors: ActorStore,
    diffs: DiffAccumulator,
    observers: ObserverRegistry,
    codec: Box<dyn DiffCodec>,
    encoder: Encoder,
    decoder: Decoder,
}

impl Scene<Replica> {
    /// Create a replica scene
    ///
    /// # Panics
    /// Panics if the configured compressor cannot be created
    pub fn new(config: SceneConfig) -> Self {
        Self::try_new(config).expect("Failed to create Scene")
    }

    pub fn try_new(config: SceneConfig) -> Result<Self, SceneError> {
        Self::build(Replica, config)
    }
}

impl Scene<Master> {
    /// Create a master scene allocating ids from `a0`
    ///
    /// # Panics
    /// Panics if the configured compressor cannot be created
    pub fn new_master(config: SceneConfig) -> Self {
        Self::try_new_master(config, ActorIdAllocator::new()).expect("Failed to create Scene")
    }

    pub fn try_new_master(
        config: SceneConfig,
        allocator: ActorIdAllocator,
    ) -> Result<Self, SceneError> {
        Self::build(Master::with_allocator(allocator), config)
    }

    pub fn next_actor_id(&mut self) -> ActorId {
        self.role.allocator.next_actor_id()
    }

    /// Allocates an id and creates the actor with `update` over the defaults.
    /// A rejected update is logged; the id is still consumed.
    pub fn spawn_actor(&mut self, update: Update) -> ActorId {
        match self.try_spawn_actor(update) {
            Ok(actor_id) => actor_id,
            Err((actor_id, rejection)) => {
                warn!("Scene: spawned id {} was not created: {}", actor_id, rejection);
                actor_id
            }
        }
    }

    /// Like `spawn_actor`, but hands back the allocated id with the reason
    /// when the update is refused, e.g. a seeded allocator reissuing an id
    /// whose actor holds a newer revision.
    pub fn try_spawn_actor(
        &mut self,
        mut update: Update,
    ) -> Result<ActorId, (ActorId, UpdateRejection)> {
        let actor_id = self.next_actor_id();
        update.deleted = false;
        match self.try_update_actor(&actor_id, update, false) {
            Ok(()) => Ok(actor_id),
            Err(rejection) => Err((actor_id, rejection)),
        }
    }
}

impl<R: SceneRole> Scene<R> {
    fn build(role: R, config: SceneConfig) -> Result<Self, SceneError> {
        let compression_mode = config.compression.mode.as_ref();
        if compression_mode.is_some() && !cfg!(feature = "zstd_support") {
            warn!("Scene: compression configured but the `zstd_support` feature is disabled; payloads are sent uncompressed");
        }
        let encoder = Encoder::new(compression_mode)?;
        let decoder = Decoder::new(compression_mode, config.compression.max_decompressed_bytes)?;

        info!(
            "Scene: created {} scene (protocol version {}, {:?} codec)",
            R::NAME,
            config.protocol_version,
            config.codec
        );

        Ok(Self {
            role,
            codec: config.codec.build(),
            actors: ActorStore::new(config.tombstone_capacity),
            diffs: DiffAccumulator::new(),
            observers: ObserverRegistry::new(),
            encoder,
            decoder,
            config,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    // Actors

    /// Creates the actor with defaults if absent; an existing actor keeps its fields
    pub fn add_actor(&mut self, actor_id: &ActorId) -> bool {
        self.update_actor(actor_id, Update::new(), false)
    }

    pub fn get_actor(&self, actor_id: &ActorId) -> Option<&Actor> {
        self.actors.get(actor_id)
    }

    pub fn try_get_actor(&self, actor_id: &ActorId) -> Result<&Actor, SceneError> {
        self.actors
            .get(actor_id)
            .ok_or_else(|| SceneError::ActorNotFound {
                actor_id: actor_id.to_string(),
            })
    }

    pub fn actor_exists(&self, actor_id: &ActorId) -> bool {
        self.actors.contains(actor_id)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Every live actor, in no particular order. The borrow keeps the scene
    /// from being mutated while iterating.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.iter()
    }

    pub fn for_each(&self, f: impl FnMut(&Actor)) {
        self.actors.iter().for_each(f);
    }

    pub fn remove_actor(&mut self, actor_id: &ActorId) -> bool {
        self.update_actor(actor_id, Update::tombstone(), false)
    }

    /// Removes every live actor, queueing a tombstone for each
    pub fn clear(&mut self) {
        for actor_id in self.actors.ids() {
            self.remove_actor(&actor_id);
        }
    }

    /// Applies `update` and returns whether it was accepted.
    /// Rejections are expected under unreliable delivery and only logged.
    pub fn update_actor(&mut self, actor_id: &ActorId, update: Update, invoke_callbacks: bool) -> bool {
        match self.try_update_actor(actor_id, update, invoke_callbacks) {
            Ok(()) => true,
            Err(rejection) => {
                debug!("Scene: {}", rejection);
                false
            }
        }
    }

    /// Applies `update`, naming the reason when it is rejected.
    ///
    /// An update without a revision originates locally and is stamped with the
    /// next revision; an update carrying one must be newer than the stored
    /// revision. Accepted changes are merged into the actor and into the
    /// pending diff.
    pub fn try_update_actor(
        &mut self,
        actor_id: &ActorId,
        mut update: Update,
        invoke_callbacks: bool,
    ) -> Result<(), UpdateRejection> {
        let Some(current) = self.actors.get(actor_id).map(|actor| actor.revision) else {
            return self.create_actor(actor_id, update, invoke_callbacks);
        };

        let revision = match update.revision {
            Some(incoming) => {
                if !self.config.revision.is_newer(current, incoming) {
                    return Err(UpdateRejection::StaleUpdate {
                        actor_id: actor_id.to_string(),
                        current,
                        incoming,
                    });
                }
                incoming
            }
            None => {
                let next = self.config.revision.next(current);
                update.revision = Some(next);
                next
            }
        };

        if update.deleted {
            self.actors.remove(actor_id, revision);
            self.diffs.record_deletion(actor_id, revision);
            if invoke_callbacks {
                self.observers.notify(actor_id, &update, None);
            }
            return Ok(());
        }

        if let Some(actor) = self.actors.get_mut(actor_id) {
            update.apply_to(actor);
        }
        self.diffs.record_update(actor_id, &update);
        if invoke_callbacks {
            self.observers
                .notify(actor_id, &update, self.actors.get(actor_id));
        }
        Ok(())
    }

    fn create_actor(
        &mut self,
        actor_id: &ActorId,
        mut update: Update,
        invoke_callbacks: bool,
    ) -> Result<(), UpdateRejection> {
        if update.deleted {
            return Err(UpdateRejection::UnknownActorDeletion {
                actor_id: actor_id.to_string(),
            });
        }

        if let Some(deleted_at) = self.actors.tombstone(actor_id) {
            match update.revision {
                Some(incoming) if !self.config.revision.is_newer(deleted_at, incoming) => {
                    return Err(UpdateRejection::DeletedActor {
                        actor_id: actor_id.to_string(),
                        deleted_at,
                        incoming,
                    });
                }
                Some(_) => {}
                // local recreation continues counting after the deletion
                None => update.revision = Some(self.config.revision.next(deleted_at)),
            }
        }

        let mut actor = Actor::new(actor_id.clone());
        update.apply_to(&mut actor);
        self.diffs.record_creation(actor_id, Update::from(&actor));
        self.actors.insert(actor);

        if invoke_callbacks {
            self.observers
                .notify(actor_id, &update, self.actors.get(actor_id));
        }
        Ok(())
    }

    // Observers

    /// Registers `observer` for changes to `actor_id` applied with callbacks enabled
    pub fn on_actor_update(
        &mut self,
        actor_id: &ActorId,
        observer: impl FnMut(&Update, Option<&Actor>) + Send + 'static,
    ) -> ObserverHandle {
        self.observers.register(actor_id, Box::new(observer))
    }

    /// Disposes an observer; returns false if it was already gone
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        self.observers.unregister(&handle)
    }

    // Outgoing diffs

    /// With `get_all`, a full snapshot of every live actor that leaves the
    /// pending diff untouched. Otherwise the pending diff, which is drained.
    pub fn retrieve_diff(&mut self, get_all: bool) -> Diff {
        if get_all {
            return Diff::with_updates(
                self.config.protocol_version,
                self.actors
                    .iter()
                    .map(|actor| (actor.actor_id.clone(), Update::from(actor))),
            );
        }
        Diff {
            version: self.config.protocol_version,
            updates: self.diffs.drain(),
        }
    }

    pub fn retrieve_serialized_diff(&mut self, get_all: bool) -> Result<SerializedDiff, SceneError> {
        let diff = self.retrieve_diff(get_all);
        self.serialize_diff(&diff)
    }

    pub fn pending_diff_len(&self) -> usize {
        self.diffs.pending_len()
    }

    /// Gives `consumer` its own pending diff, fed by every later change
    pub fn register_consumer(&mut self, consumer: ConsumerKey) -> bool {
        self.diffs.register_consumer(consumer)
    }

    pub fn deregister_consumer(&mut self, consumer: ConsumerKey) -> bool {
        self.diffs.deregister_consumer(consumer)
    }

    /// Drains the pending diff of one registered consumer
    pub fn retrieve_diff_for(&mut self, consumer: ConsumerKey) -> Result<Diff, SceneError> {
        let updates = self
            .diffs
            .drain_consumer(consumer)
            .ok_or(SceneError::UnknownConsumer { consumer })?;
        Ok(Diff {
            version: self.config.protocol_version,
            updates,
        })
    }

    pub fn retrieve_serialized_diff_for(
        &mut self,
        consumer: ConsumerKey,
    ) -> Result<SerializedDiff, SceneError> {
        let diff = self.retrieve_diff_for(consumer)?;
        self.serialize_diff(&diff)
    }

    pub fn serialize_diff(&mut self, diff: &Diff) -> Result<SerializedDiff, SceneError> {
        let encoded = self.codec.encode(diff)?;
        let data = self.encoder.encode(encoded)?;
        Ok(SerializedDiff {
            count: diff.len(),
            data,
        })
    }

    // Incoming diffs

    pub fn deserialize_diff(&mut self, bytes: &[u8]) -> Result<Diff, SceneError> {
        let decompressed = self.decoder.decode(bytes)?;
        Ok(self.codec.decode(&decompressed)?)
    }

    /// Applies every entry of `diff` except the one keyed by `skip_id`, and
    /// returns how many were accepted. A diff of another protocol version is
    /// dropped whole.
    pub fn apply_diff(&mut self, diff: Diff, skip_id: Option<&ActorId>) -> Result<usize, SceneError> {
        if diff.version != self.config.protocol_version {
            error!(
                "Scene: dropping diff with version {} (local protocol version {})",
                diff.version, self.config.protocol_version
            );
            return Err(SceneError::VersionMismatch {
                expected: self.config.protocol_version,
                received: diff.version,
            });
        }

        let total = diff.len();
        let mut applied = 0;
        for (actor_id, update) in diff.updates {
            if skip_id == Some(&actor_id) {
                continue;
            }
            if self.update_actor(&actor_id, update, true) {
                applied += 1;
            }
        }
        debug!("Scene: applied {} of {} diff entries", applied, total);
        Ok(applied)
    }

    pub fn apply_serialized_diff(
        &mut self,
        bytes: &[u8],
        skip_id: Option<&ActorId>,
    ) -> Result<usize, SceneError> {
        let diff = self.deserialize_diff(bytes).inspect_err(|err| {
            error!("Scene: failed to decode diff of {} bytes: {}", bytes.len(), err);
        })?;
        self.apply_diff(diff, skip_id)
    }
}
