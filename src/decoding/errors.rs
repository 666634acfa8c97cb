//! Errors that can occur while decoding.

use crate::common::{HEADER_SIZE, MAX_TREE_DEPTH};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GetBitsError {
    /// All valid bits have been read. Ends decoding of the symbol codes.
    #[error("End of stream reached")]
    EndOfStream,
    #[error("Cant read a byte at bit {bit_pos}, only {valid_bits} bits are valid")]
    InvalidPaddingRead { bit_pos: usize, valid_bits: usize },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BitReaderError {
    #[error("Source needs to have at least one byte holding the sentinel")]
    MissingSentinel,
    #[error("Sentinel must be in 0..=7 but is: {got}")]
    InvalidSentinel { got: u8 },
    #[error("Sentinel announces {sentinel} valid bits but there is no byte holding them")]
    MissingPartialByte { sentinel: u8 },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    #[error("Tree needs more than the {budget} bits in the header, read {consumed} bits")]
    BudgetExhausted { consumed: usize, budget: usize },
    #[error("Stream ended {consumed} bits into a tree of {budget} bits")]
    UnexpectedEnd { consumed: usize, budget: usize },
    #[error("Tree is nested {depth} levels deep, the limit is {max}", max = MAX_TREE_DEPTH)]
    TooDeep { depth: usize },
    #[error("Tree took {consumed} bits but the header says it takes {budget} bits")]
    SizeMismatch { consumed: usize, budget: usize },
    #[error("Failed to read leaf symbol: {0}")]
    InvalidSymbol(#[from] GetBitsError),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Source needs {need} bytes for the header, got: {got}", need = HEADER_SIZE)]
    MalformedHeader { got: usize },
    #[error(transparent)]
    BitReaderError(#[from] BitReaderError),
    #[error("Malformed tree: {0}")]
    MalformedTree(#[from] TreeError),
    #[error(transparent)]
    GetBitsError(#[from] GetBitsError),
    #[error("Header announces an empty tree but {bits} bits of codes follow")]
    EmptyTreeWithPayload { bits: usize },
    #[error("Stream ended in the middle of a code, {bits} bits of it were read")]
    TruncatedCode { bits: usize },
    #[error("Found a 1 bit at bit {bit_pos}, a tree with a single symbol only has the code 0")]
    UnexpectedBranch { bit_pos: usize },
}
