//! Compressing data into the huffpack format.
//!
//! Encoding makes two passes over the input: the first counts every byte to build the
//! tree, the second writes each byte's code right behind the serialized tree.
pub mod bit_writer;

use crate::common::header_bytes;
use crate::huff0::{build_tree, CodeTable, FrequencyTable};
use alloc::vec::Vec;
use bit_writer::BitWriter;
use tracing::{debug, trace};

/// Compress `data` into a self-describing payload.
///
/// Empty input produces a header announcing an empty tree and a lone sentinel byte,
/// `[0, 0, 0, 0, 0]`.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let (tree_size_bits, writer) = encode_body(data);
    let body = writer.flush();

    let mut output = Vec::with_capacity(crate::common::HEADER_SIZE + body.len());
    output.extend_from_slice(&header_bytes(tree_size_bits));
    output.extend_from_slice(&body);
    debug!(
        "encoded {} bytes into {} bytes (tree: {} bits)",
        data.len(),
        output.len(),
        tree_size_bits
    );
    output
}

/// Like [encode], but writes the payload into `sink`. Returns how many bytes were written.
#[cfg(feature = "std")]
pub fn encode_into<W: std::io::Write>(data: &[u8], sink: &mut W) -> Result<usize, std::io::Error> {
    let (tree_size_bits, writer) = encode_body(data);
    sink.write_all(&header_bytes(tree_size_bits))?;
    let written = writer.flush_into(sink)?;
    Ok(crate::common::HEADER_SIZE + written)
}

/// Writes the tree and the codes for all of `data` into a new [BitWriter].
/// Returns the tree size in bits together with the unflushed writer.
fn encode_body(data: &[u8]) -> (u32, BitWriter) {
    let frequencies = FrequencyTable::from_data(data);
    let root = match build_tree(&frequencies) {
        Some(root) => root,
        None => return (0, BitWriter::new()),
    };
    let codes = CodeTable::build(&root);
    let payload_bits = codes.encoded_len(&frequencies);
    debug!(
        "{} distinct symbols, tree depth {}, {} payload bits",
        frequencies.distinct_symbols(),
        root.depth(),
        payload_bits
    );
    for (symbol, code) in codes.iter() {
        trace!("code {:#04x}: {:?}", symbol, code);
    }

    let mut writer = BitWriter::with_capacity(data.len() / 2 + 64);
    let tree_size_bits = writer.write_tree(&root);
    // no realignment, the codes continue right where the tree ends
    for &symbol in data {
        writer.write_bits(codes.code(symbol));
    }
    debug_assert_eq!(
        writer.bits_written() as u64,
        u64::from(tree_size_bits) + payload_bits
    );

    (tree_size_bits, writer)
}
