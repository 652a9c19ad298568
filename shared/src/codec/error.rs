use thiserror::Error;

use wireplace_serde::SerdeErr;

/// Errors that can occur while encoding or decoding a whole diff.
/// A single malformed entry is not an error; it is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The binary payload ended early or held an impossible value
    #[error("Malformed binary diff: {0}")]
    Binary(#[from] SerdeErr),

    /// The diff could not be rendered as JSON
    #[error("Failed to encode text diff: {reason}")]
    TextEncode { reason: String },

    /// The payload is not a JSON diff envelope
    #[error("Malformed text diff envelope: {reason}")]
    TextDecode { reason: String },
}
