//! Structures and utilities used for decoding huffpack formatted data

pub mod bit_reader;
pub mod errors;
mod tree_reader;

use crate::common::split_header;
use crate::huff0::Node;
use alloc::vec::Vec;
use bit_reader::BitReader;
use errors::{DecodeError, GetBitsError};
use tracing::debug;

/// Decompress a payload produced by [crate::encode].
///
/// Decoding ends successfully when the stream runs out of valid bits between two codes.
/// Running out in the middle of a code is reported as [DecodeError::TruncatedCode].
pub fn decode(source: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let (tree_size_bits, body) =
        split_header(source).ok_or(DecodeError::MalformedHeader { got: source.len() })?;
    let tree_size_bits = tree_size_bits as usize;
    let mut br = BitReader::new(body)?;

    if tree_size_bits == 0 {
        if br.bits_remaining() != 0 {
            return Err(DecodeError::EmptyTreeWithPayload {
                bits: br.bits_remaining(),
            });
        }
        debug!("decoded empty payload");
        return Ok(Vec::new());
    }

    let root = br.read_tree(0, tree_size_bits)?;
    debug!(
        "read tree with {} symbols ({} bits), {} bits of codes follow",
        root.leaf_count(),
        tree_size_bits,
        br.bits_remaining()
    );

    // every code takes at least one bit
    let mut output = Vec::with_capacity(br.bits_remaining());
    match &root {
        Node::Leaf { symbol, .. } => decode_single_symbol(&mut br, *symbol, &mut output)?,
        Node::Internal { .. } => decode_codes(&mut br, &root, &mut output)?,
    }

    debug!("decoded {} bytes from {} bytes", output.len(), source.len());
    Ok(output)
}

/// Walk the tree from the root for every code, emitting a symbol whenever a leaf is reached.
fn decode_codes(
    br: &mut BitReader<'_>,
    root: &Node,
    output: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    let mut current = root;
    let mut code_bits = 0;
    loop {
        let bit = match br.read_bit() {
            Ok(bit) => bit,
            Err(GetBitsError::EndOfStream) => break,
            Err(other) => return Err(other.into()),
        };
        code_bits += 1;

        // `current` is never a leaf here, it is reset to the root after every symbol
        if let Some(next) = current.child(bit) {
            current = next;
        }
        if let Node::Leaf { symbol, .. } = current {
            output.push(*symbol);
            current = root;
            code_bits = 0;
        }
    }

    if code_bits != 0 {
        return Err(DecodeError::TruncatedCode { bits: code_bits });
    }
    Ok(())
}

/// A tree made of one leaf has the one bit code `0`, each of those bits is one symbol.
fn decode_single_symbol(
    br: &mut BitReader<'_>,
    symbol: u8,
    output: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    loop {
        let bit_pos = br.bit_pos();
        match br.read_bit() {
            Ok(0) => output.push(symbol),
            Ok(_) => return Err(DecodeError::UnexpectedBranch { bit_pos }),
            Err(GetBitsError::EndOfStream) => return Ok(()),
            Err(other) => return Err(other.into()),
        }
    }
}
