//! Values and helpers shared between the encoding side
//! and the decoding side.

use core::convert::TryInto;

// --- HEADER ---
/// Every payload starts with the size of the serialized tree in bits,
/// stored as a big-endian u32.
pub const HEADER_SIZE: usize = 4;

// --- TREE ---
/// A serialized leaf is a single `1` flag bit followed by the 8 symbol bits.
pub const LEAF_BITS: u32 = 9;
/// One symbol per byte value.
pub const NUM_SYMBOLS: usize = 256;
/// A tree over at most 256 leaves can't be deeper than this.
pub const MAX_TREE_DEPTH: usize = NUM_SYMBOLS - 1;

// --- SENTINEL ---
/// The sentinel counts the valid leading bits of the partial byte in front of it,
/// so it is never larger than 7. Zero means there is no partial byte.
pub const MAX_SENTINEL: u8 = 7;

/// Serializes the tree size header.
pub fn header_bytes(tree_size_bits: u32) -> [u8; HEADER_SIZE] {
    tree_size_bits.to_be_bytes()
}

/// Splits `source` into the tree size stored in its header and the bytes following it.
///
/// Returns `None` if `source` is too short to hold a header.
pub fn split_header(source: &[u8]) -> Option<(u32, &[u8])> {
    if source.len() < HEADER_SIZE {
        return None;
    }
    let (header, body) = source.split_at(HEADER_SIZE);
    let header: [u8; HEADER_SIZE] = header.try_into().ok()?;
    Some((u32::from_be_bytes(header), body))
}
