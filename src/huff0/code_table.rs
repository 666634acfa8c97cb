use super::{FrequencyTable, Node};
use crate::common::NUM_SYMBOLS;
use alloc::vec;
use alloc::vec::Vec;

/// Maps every symbol of a tree to its root to leaf path.
pub struct CodeTable {
    /// Index is the symbol, values are the code bits (0 = left, 1 = right) in the order they
    /// are written. Symbols that are not in the tree have an empty code.
    codes: Vec<Vec<u8>>,
}

impl CodeTable {
    /// Collect the path to every leaf of `root`.
    ///
    /// A tree that consists of a single leaf still gets a one bit code (`0`) for that leaf,
    /// so every occurrence of the symbol takes up a bit in the stream.
    pub fn build(root: &Node) -> Self {
        let mut codes = vec![Vec::new(); NUM_SYMBOLS];

        if let Node::Leaf { symbol, .. } = root {
            codes[*symbol as usize] = vec![0];
            return CodeTable { codes };
        }

        // every frame owns the path leading to its node
        let mut stack = vec![(root, Vec::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => codes[*symbol as usize] = path,
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(1);
                    let mut left_path = path;
                    left_path.push(0);
                    stack.push((right.as_ref(), right_path));
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        CodeTable { codes }
    }

    /// The code for `symbol`, empty if the symbol isn't part of the tree.
    pub fn code(&self, symbol: u8) -> &[u8] {
        &self.codes[symbol as usize]
    }

    /// All symbols with a code, ascending by symbol value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(symbol, code)| (symbol as u8, code.as_slice()))
    }

    /// Number of bits needed to encode input with these symbol counts.
    pub fn encoded_len(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .entries()
            .map(|e| e.count * self.code(e.symbol).len() as u64)
            .sum()
    }
}
