//! Reconstructs the tree serialized by `BitWriter::write_tree`.

use super::bit_reader::BitReader;
use super::errors::{GetBitsError, TreeError};
use crate::common::MAX_TREE_DEPTH;
use crate::huff0::Node;

impl<'s> BitReader<'s> {
    /// Parse a preorder serialized tree that starts at `start_bit` and takes up exactly
    /// `tree_size_bits` bits.
    ///
    /// The serialized tree has no end marker of its own, the size from the header is the
    /// only thing separating tree bits from code bits. Parsed nodes carry weight 0.
    pub fn read_tree(
        &mut self,
        start_bit: usize,
        tree_size_bits: usize,
    ) -> Result<Node, TreeError> {
        let root = self.read_subtree(start_bit, tree_size_bits, 0)?;
        let consumed = self.bit_pos() - start_bit;
        if consumed != tree_size_bits {
            return Err(TreeError::SizeMismatch {
                consumed,
                budget: tree_size_bits,
            });
        }
        Ok(root)
    }

    fn read_subtree(
        &mut self,
        start_bit: usize,
        budget: usize,
        depth: usize,
    ) -> Result<Node, TreeError> {
        let consumed = self.bit_pos() - start_bit;
        if consumed >= budget {
            return Err(TreeError::BudgetExhausted { consumed, budget });
        }
        if depth > MAX_TREE_DEPTH {
            return Err(TreeError::TooDeep { depth });
        }

        let flag = match self.read_bit() {
            Ok(flag) => flag,
            Err(GetBitsError::EndOfStream) => {
                return Err(TreeError::UnexpectedEnd { consumed, budget })
            }
            Err(other) => return Err(other.into()),
        };

        if flag == 1 {
            let symbol = self.read_byte()?;
            return Ok(Node::leaf(symbol, 0));
        }

        let left = self.read_subtree(start_bit, budget, depth + 1)?;
        let right = self.read_subtree(start_bit, budget, depth + 1)?;
        Ok(Node::internal(left, right))
    }
}
