use thiserror::Error;

use crate::{codec::CodecError, compression::error::CompressionError, types::ProtocolVersion};

/// Errors surfaced by Scene operations. None of them leave the scene in a
/// partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The caller asserted an actor exists, but it does not
    #[error("Actor {actor_id} not found")]
    ActorNotFound { actor_id: String },

    /// The whole diff was dropped because its protocol version differs
    #[error("Diff version {received} does not match local protocol version {expected}")]
    VersionMismatch {
        expected: ProtocolVersion,
        received: ProtocolVersion,
    },

    /// No consumer with this key is registered on the scene
    #[error("Diff consumer {consumer} is not registered")]
    UnknownConsumer { consumer: u64 },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Compression error: {0}")]
    Compression(#[from] CompressionError),
}
