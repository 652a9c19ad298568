/// Payloads larger than this are refused when decompressing
pub const DEFAULT_MAX_DECOMPRESSED_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct CompressionConfig {
    /// `None` sends encoded diffs as-is
    pub mode: Option<CompressionMode>,
    /// Upper bound on the size of a decompressed payload
    pub max_decompressed_bytes: usize,
}

impl CompressionConfig {
    pub fn new(mode: CompressionMode) -> Self {
        Self {
            mode: Some(mode),
            max_decompressed_bytes: DEFAULT_MAX_DECOMPRESSED_BYTES,
        }
    }

    pub fn disabled() -> Self {
        Self {
            mode: None,
            max_decompressed_bytes: DEFAULT_MAX_DECOMPRESSED_BYTES,
        }
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CompressionMode {
    /// Compression mode using default zstd dictionary.
    /// 1st i32 parameter here is the compression level from -7 (fastest) to 22
    /// (smallest).
    Default(i32),
    /// Compression mode using custom dictionary.
    /// 1st i32 parameter here is the compression level from -7 (fastest) to 22
    /// (smallest). 2nd `Vec<u8>` parameter is the dictionary itself.
    Dictionary(i32, Vec<u8>),
}
