use crate::huff0::Node;
use alloc::vec::Vec;

/// An interface for writing single bits and whole bytes into a buffer, most significant
/// bit first.
///
/// Bits are collected in an accumulator byte that is pushed to the buffer once it is full.
/// [BitWriter::flush] pushes whatever is left and terminates the output with the sentinel
/// byte.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// The buffer that's filled with complete bytes
    output: Vec<u8>,
    /// The byte that is currently being filled, starting at its most significant bit
    current: u8,
    /// The next free bit in `current`, counted from the most significant bit. Always < 8.
    cursor: u8,
}

impl BitWriter {
    /// Initialize a new writer. Write into it with `write_bit`, `write_byte` and
    /// `write_tree` and obtain the output using `flush`
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            current: 0,
            cursor: 0,
        }
    }

    /// Initialize a new writer with room for `capacity` bytes of output.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            current: 0,
            cursor: 0,
        }
    }

    /// The number of bits written so far.
    pub fn bits_written(&self) -> usize {
        self.output.len() * 8 + self.cursor as usize
    }

    /// Write a single bit. Any non-zero `bit` writes a 1. Returns the number of bits written.
    pub fn write_bit(&mut self, bit: u8) -> u32 {
        // `current` starts out zeroed, so a 0 only needs to move the cursor
        if bit != 0 {
            self.current |= 0b1000_0000 >> self.cursor;
        }
        self.cursor += 1;
        if self.cursor == 8 {
            self.output.push(self.current);
            self.current = 0;
            self.cursor = 0;
        }
        1
    }

    /// Write a sequence of bits, such as a symbol code, in order.
    pub fn write_bits(&mut self, bits: &[u8]) -> u32 {
        bits.iter().map(|&bit| self.write_bit(bit)).sum()
    }

    /// Write all 8 bits of `byte`. Returns the number of bits written.
    ///
    /// When the writer isn't byte aligned, the byte is split: the upper `8 - cursor` bits
    /// complete the current byte, the lower `cursor` bits start the next one.
    /// The cursor position is the same afterwards.
    pub fn write_byte(&mut self, byte: u8) -> u32 {
        if self.cursor == 0 {
            self.output.push(byte);
        } else {
            //  cursor = 3, byte = ABCDEFGH
            //  current: xxx00000 | 000ABCDE -> pushed
            //  current: FGH00000
            self.output.push(self.current | (byte >> self.cursor));
            self.current = byte << (8 - self.cursor);
        }
        8
    }

    /// Serialize a tree in preorder: an internal node is a `0` followed by its left and
    /// right subtree, a leaf is a `1` followed by its symbol byte.
    ///
    /// Returns the exact number of bits the subtree occupies.
    pub fn write_tree(&mut self, node: &Node) -> u32 {
        match node {
            Node::Leaf { symbol, .. } => self.write_bit(1) + self.write_byte(*symbol),
            Node::Internal { left, right, .. } => {
                self.write_bit(0) + self.write_tree(left) + self.write_tree(right)
            }
        }
    }

    /// Returns the bytes written so far, terminated by the sentinel byte.
    ///
    /// An incomplete last byte is padded with zeros in its low bits. The sentinel holds the
    /// number of valid leading bits in that byte, or 0 if the last byte is complete.
    ///
    /// This function consumes the writer, so it cannot be used after flushing
    pub fn flush(mut self) -> Vec<u8> {
        let sentinel = self.cursor;
        if self.cursor != 0 {
            self.output.push(self.current);
        }
        self.output.push(sentinel);
        self.output
    }

    /// Like [BitWriter::flush], but writes the bytes into `sink`.
    /// Returns how many bytes were written.
    #[cfg(feature = "std")]
    pub fn flush_into<W: std::io::Write>(self, sink: &mut W) -> Result<usize, std::io::Error> {
        let bytes = self.flush();
        sink.write_all(&bytes)?;
        Ok(bytes.len())
    }
}
