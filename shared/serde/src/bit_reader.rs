use crate::error::SerdeErr;

pub struct BitReader<'b> {
    buffer: &'b [u8],
    buffer_index: usize,
    scratch: u8,
    scratch_bits_left: u8,
    bits_read: u32,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            buffer_index: 0,
            scratch: 0,
            scratch_bits_left: 0,
            bits_read: 0,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        if self.scratch_bits_left == 0 {
            let Some(byte) = self.buffer.get(self.buffer_index) else {
                return Err(SerdeErr::UnexpectedEnd {
                    bits_read: self.bits_read,
                });
            };
            self.scratch = *byte;
            self.scratch_bits_left = 8;
            self.buffer_index += 1;
        }

        let bit = self.scratch & 1 != 0;
        self.scratch >>= 1;
        self.scratch_bits_left -= 1;
        self.bits_read += 1;

        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let mut output: u8 = 0;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }

    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let mut output = [0_u8; N];
        for byte in output.iter_mut() {
            *byte = self.read_byte()?;
        }
        Ok(output)
    }

    pub fn bits_read(&self) -> u32 {
        self.bits_read
    }

    /// Bits left unread, counting the zero padding of the final byte
    pub fn bits_remaining(&self) -> usize {
        (self.buffer.len() - self.buffer_index) * 8 + self.scratch_bits_left as usize
    }
}
