use thiserror::Error;

/// Errors that can occur while compressing or decompressing serialized diffs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    /// Failed to create compressor with the specified configuration
    #[error("Failed to create compressor with compression level {level}")]
    CompressorCreationFailed { level: i32 },

    /// Failed to create decompressor
    #[error("Failed to create decompressor")]
    DecompressorCreationFailed,

    /// Compression operation failed
    #[error("Failed to compress payload of {payload_size} bytes")]
    CompressionFailed { payload_size: usize },

    /// Decompression failed or the result would exceed the configured bound
    #[error("Failed to decompress payload of {payload_size} bytes (limit {limit} bytes)")]
    DecompressionFailed { payload_size: usize, limit: usize },
}
