cfg_if! {
    if #[cfg(feature = "zstd_support")]
    {
        use zstd::bulk::Compressor;

        use super::{compression_config::CompressionMode, error::CompressionError};

        pub struct Encoder {
            compressor: Option<Compressor<'static>>,
        }

        impl Encoder {
            pub fn new(compression_mode: Option<&CompressionMode>) -> Result<Self, CompressionError> {
                let compressor = match compression_mode {
                    None => None,
                    Some(CompressionMode::Default(level)) => Some(
                        Compressor::new(*level)
                            .map_err(|_| CompressionError::CompressorCreationFailed { level: *level })?,
                    ),
                    Some(CompressionMode::Dictionary(level, dictionary)) => Some(
                        Compressor::with_dictionary(*level, dictionary)
                            .map_err(|_| CompressionError::CompressorCreationFailed { level: *level })?,
                    ),
                };
                Ok(Self { compressor })
            }

            pub fn encode(&mut self, payload: Vec<u8>) -> Result<Vec<u8>, CompressionError> {
                let Some(compressor) = &mut self.compressor else {
                    return Ok(payload);
                };
                compressor
                    .compress(&payload)
                    .map_err(|_| CompressionError::CompressionFailed {
                        payload_size: payload.len(),
                    })
            }
        }
    }
    else
    {
        use super::{compression_config::CompressionMode, error::CompressionError};

        pub struct Encoder;

        impl Encoder {
            pub fn new(_: Option<&CompressionMode>) -> Result<Self, CompressionError> {
                Ok(Self)
            }

            pub fn encode(&mut self, payload: Vec<u8>) -> Result<Vec<u8>, CompressionError> {
                Ok(payload)
            }
        }
    }
}
