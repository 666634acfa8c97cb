use super::errors::{BitReaderError, GetBitsError};
use crate::common::MAX_SENTINEL;

/// Reads single bits and whole bytes from a payload, most significant bit first.
///
/// The last byte of the source is the sentinel written by the `BitWriter`. It is never
/// read as data, it only tells how many leading bits of the byte in front of it are valid
/// (0 = all of them).
pub struct BitReader<'s> {
    source: &'s [u8],
    /// index of the byte the next bit is read from
    idx: usize,
    /// 0..8, the next bit in `source[idx]`, counted from the most significant bit
    cursor: u8,
    sentinel: u8,
    /// number of bits that carry data, excluding the padding of a partial byte and the sentinel
    valid_bits: usize,
}

impl<'s> BitReader<'s> {
    pub fn new(source: &'s [u8]) -> Result<BitReader<'s>, BitReaderError> {
        let (&sentinel, data) = source.split_last().ok_or(BitReaderError::MissingSentinel)?;
        if sentinel > MAX_SENTINEL {
            return Err(BitReaderError::InvalidSentinel { got: sentinel });
        }

        let valid_bits = if sentinel == 0 {
            data.len() * 8
        } else if data.is_empty() {
            return Err(BitReaderError::MissingPartialByte { sentinel });
        } else {
            (data.len() - 1) * 8 + sentinel as usize
        };

        Ok(BitReader {
            source,
            idx: 0,
            cursor: 0,
            sentinel,
            valid_bits,
        })
    }

    /// Number of bits already read.
    pub fn bit_pos(&self) -> usize {
        self.idx * 8 + self.cursor as usize
    }

    /// Number of bits in the stream that carry data.
    pub fn valid_bits(&self) -> usize {
        self.valid_bits
    }

    pub fn bits_remaining(&self) -> usize {
        self.valid_bits.saturating_sub(self.bit_pos())
    }

    pub fn sentinel(&self) -> u8 {
        self.sentinel
    }

    /// Returns the next bit as 0 or 1.
    pub fn read_bit(&mut self) -> Result<u8, GetBitsError> {
        if self.bit_pos() >= self.valid_bits {
            return Err(GetBitsError::EndOfStream);
        }

        let bit = (self.source[self.idx] >> (7 - self.cursor)) & 1;
        if self.cursor == 7 {
            self.cursor = 0;
            self.idx += 1;
        } else {
            self.cursor += 1;
        }
        Ok(bit)
    }

    /// Returns the next 8 bits as a byte.
    ///
    /// Fails with [GetBitsError::EndOfStream] if no valid bits are left, and with
    /// [GetBitsError::InvalidPaddingRead] if fewer than 8 are left, as the byte would
    /// contain padding.
    pub fn read_byte(&mut self) -> Result<u8, GetBitsError> {
        let bit_pos = self.bit_pos();
        if bit_pos >= self.valid_bits {
            return Err(GetBitsError::EndOfStream);
        }
        if self.valid_bits - bit_pos < 8 {
            return Err(GetBitsError::InvalidPaddingRead {
                bit_pos,
                valid_bits: self.valid_bits,
            });
        }

        let byte = if self.cursor == 0 {
            self.source[self.idx]
        } else {
            //  cursor = 3
            //  source[idx]:     xxxABCDE -> ABCDE000
            //  source[idx + 1]: FGHxxxxx -> 00000FGH
            let high = self.source[self.idx] << self.cursor;
            let low = self.source[self.idx + 1] >> (8 - self.cursor);
            high | low
        };
        self.idx += 1;
        Ok(byte)
    }
}
