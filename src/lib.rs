//! A static Huffman codec with a self-describing, bit-packed wire format.
//!
//! Compressed data is laid out as
//! `[u32 BE tree size in bits][tree][codes][partial byte?][sentinel]`:
//! the tree is serialized in preorder right in front of the symbol codes,
//! and the final sentinel byte tells how many bits of the byte before it are valid.
//!
//! ```
//! let data = b"abracadabra";
//! let compressed = huffpack::encode(data);
//! let decompressed = huffpack::decode(&compressed).unwrap();
//! assert_eq!(&decompressed[..], &data[..]);
//! ```
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

pub mod common;
pub mod decoding;
pub mod encoding;
pub mod huff0;
mod tests;

#[cfg(feature = "std")]
pub mod io;

pub use decoding::decode;
pub use decoding::errors::DecodeError;
pub use encoding::encode;

/// Encodes `data`, decodes the result and checks that nothing was lost.
#[cfg(feature = "fuzz_exports")]
pub fn round_trip(data: &[u8]) {
    let encoded = encode(data);
    let decoded = decode(&encoded).expect("decoding freshly encoded data must succeed");
    assert_eq!(data, &decoded[..]);
}
