//! Encoding of diffs for the transport.
//!
//! Both presentations share one contract: only present fields travel, an
//! absent field decodes back to absent (never to a zero), and an entry that
//! lost its actor id is skipped without failing the rest of the payload.

mod binary;
mod error;
mod text;

pub use binary::BinaryCodec;
pub use error::CodecError;
pub use text::TextCodec;

use crate::world::diff::Diff;

pub trait DiffCodec: Send + Sync {
    fn encode(&self, diff: &Diff) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, bytes: &[u8]) -> Result<Diff, CodecError>;
}

/// Which presentation a scene serializes with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodecKind {
    /// Compact bit-packed form for production traffic
    #[default]
    Binary,
    /// Human-readable JSON form for diagnostics
    Text,
}

impl CodecKind {
    pub fn build(self) -> Box<dyn DiffCodec> {
        match self {
            CodecKind::Binary => Box::new(BinaryCodec::new()),
            CodecKind::Text => Box::new(TextCodec::new()),
        }
    }
}
