use thiserror::Error;

/// Errors that can occur while reading bit-packed data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The reader ran past the end of the buffer
    #[error("Unexpected end of buffer after {bits_read} bits")]
    UnexpectedEnd { bits_read: u32 },

    /// A variable-length integer encoded more bits than fit in a u64
    #[error("Variable integer exceeds 64 bits ({bits} bits read)")]
    IntegerOverflow { bits: u32 },

    /// A string payload was not valid UTF-8
    #[error("String of {length} bytes is not valid UTF-8")]
    InvalidUtf8 { length: usize },
}
