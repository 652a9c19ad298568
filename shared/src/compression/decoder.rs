cfg_if! {
    if #[cfg(feature = "zstd_support")]
    {
        use zstd::bulk::Decompressor;

        use super::{compression_config::CompressionMode, error::CompressionError};

        pub struct Decoder {
            decompressor: Option<Decompressor<'static>>,
            max_decompressed_bytes: usize,
        }

        impl Decoder {
            pub fn new(
                compression_mode: Option<&CompressionMode>,
                max_decompressed_bytes: usize,
            ) -> Result<Self, CompressionError> {
                let decompressor = match compression_mode {
                    None => None,
                    Some(CompressionMode::Default(_)) => Some(
                        Decompressor::new().map_err(|_| CompressionError::DecompressorCreationFailed)?,
                    ),
                    Some(CompressionMode::Dictionary(_, dictionary)) => Some(
                        Decompressor::with_dictionary(dictionary)
                            .map_err(|_| CompressionError::DecompressorCreationFailed)?,
                    ),
                };
                Ok(Self {
                    decompressor,
                    max_decompressed_bytes,
                })
            }

            /// Payloads come from peers: malformed or oversized input is an
            /// error, never a panic.
            pub fn decode(&mut self, payload: &[u8]) -> Result<Vec<u8>, CompressionError> {
                let Some(decompressor) = &mut self.decompressor else {
                    return Ok(payload.to_vec());
                };
                decompressor
                    .decompress(payload, self.max_decompressed_bytes)
                    .map_err(|_| CompressionError::DecompressionFailed {
                        payload_size: payload.len(),
                        limit: self.max_decompressed_bytes,
                    })
            }
        }
    }
    else
    {
        use super::{compression_config::CompressionMode, error::CompressionError};

        pub struct Decoder;

        impl Decoder {
            pub fn new(
                _: Option<&CompressionMode>,
                _: usize,
            ) -> Result<Self, CompressionError> {
                Ok(Self)
            }

            pub fn decode(&mut self, payload: &[u8]) -> Result<Vec<u8>, CompressionError> {
                Ok(payload.to_vec())
            }
        }
    }
}
