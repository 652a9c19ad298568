use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde};

/// An unsigned integer written in chunks of `BITS` bits, each chunk preceded
/// by a "proceed" bit. Small values cost `BITS + 1` bits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct UnsignedVariableInteger<const BITS: u8> {
    inner: u64,
}

impl<const BITS: u8> UnsignedVariableInteger<BITS> {
    pub fn new<T: Into<u64>>(value: T) -> Self {
        Self {
            inner: value.into(),
        }
    }

    pub fn get(&self) -> u64 {
        self.inner
    }

    pub fn set<T: Into<u64>>(&mut self, value: T) {
        self.inner = value.into();
    }
}

impl<const BITS: u8> Serde for UnsignedVariableInteger<BITS> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let mut value = self.inner;
        loop {
            let proceed = (value >> BITS) != 0;
            writer.write_bit(proceed);
            for _ in 0..BITS {
                writer.write_bit(value & 1 != 0);
                value >>= 1;
            }
            if !proceed {
                return;
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let mut total_bits: u32 = 0;
        let mut output: u64 = 0;

        loop {
            let proceed = reader.read_bit()?;

            for _ in 0..BITS {
                if reader.read_bit()? {
                    if total_bits >= u64::BITS {
                        return Err(SerdeErr::IntegerOverflow { bits: total_bits + 1 });
                    }
                    output |= 1 << total_bits;
                }
                total_bits += 1;
            }

            if !proceed {
                return Ok(Self { inner: output });
            }
        }
    }

    fn bit_length(&self) -> u32 {
        let mut output: u32 = 0;
        let mut value = self.inner;
        loop {
            output += 1 + BITS as u32;
            value >>= BITS;
            if value == 0 {
                return output;
            }
        }
    }
}

impl<const BITS: u8, T: Into<u64>> From<T> for UnsignedVariableInteger<BITS> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
