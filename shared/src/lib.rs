//! # WirePlace Shared
//! Revision-gated replication of actor state between a master scene and its
//! replicas: the actor store, conflict resolution, diff accumulation and the
//! wire codecs diffs travel in.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub use wireplace_serde::{
    BitCounter, BitReader, BitWrite, BitWriter, Serde, SerdeErr, UnsignedVariableInteger,
};

mod codec;
mod compression;
mod revision;
mod scene;
mod types;
mod world;

pub use codec::{BinaryCodec, CodecError, CodecKind, DiffCodec, TextCodec};
pub use compression::{
    compression_config::{CompressionConfig, CompressionMode, DEFAULT_MAX_DECOMPRESSED_BYTES},
    decoder::Decoder,
    encoder::Encoder,
    error::CompressionError,
};
pub use revision::{
    is_revision_newer, RevisionWindow, RevisionWindowError, MAX_REVISION, REVISION_BUFFER,
};
pub use scene::{
    api::{MasterScene, ReplicatedScene},
    config::{SceneConfig, DEFAULT_TOMBSTONE_CAPACITY},
    error::SceneError,
    role::{Master, Replica, SceneRole},
    scene::Scene,
};
pub use types::{ProtocolVersion, Revision, PROTOCOL_VERSION};
pub use world::{
    actor::{Actor, AnimationAction, Vector3, DEFAULT_SPEED},
    actor_id::ActorId,
    diff::{Diff, SerializedDiff},
    diff_accumulator::ConsumerKey,
    error::UpdateRejection,
    id_allocator::ActorIdAllocator,
    observers::{ActorObserver, ObserverHandle},
    update::Update,
};
