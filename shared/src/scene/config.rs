use std::default::Default;

use crate::{
    codec::CodecKind, compression::compression_config::CompressionConfig,
    revision::RevisionWindow, types::ProtocolVersion, PROTOCOL_VERSION,
};

/// Deletions remembered per scene unless configured otherwise
pub const DEFAULT_TOMBSTONE_CAPACITY: usize = 65_536;

/// Contains Config properties which will be used by a Scene
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Version stamped on outgoing diffs; incoming diffs must match exactly
    pub protocol_version: ProtocolVersion,
    /// Range and guard band of the per-actor revision counter
    pub revision: RevisionWindow,
    /// Presentation used by the serialized diff operations
    pub codec: CodecKind,
    /// Optional compression of serialized diffs (requires `zstd_support`)
    pub compression: CompressionConfig,
    /// How many deleted actor ids are remembered to reject stale replays
    pub tombstone_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            revision: RevisionWindow::default(),
            codec: CodecKind::default(),
            compression: CompressionConfig::disabled(),
            tombstone_capacity: DEFAULT_TOMBSTONE_CAPACITY,
        }
    }
}
