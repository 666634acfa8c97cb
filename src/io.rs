//! Adapters that run the codec between a [Read] source and a [Write] sink.
//!
//! The codec needs the whole input up front (the tree is built from all of it), so these
//! read the source to its end before producing any output.
pub use std::io::{Error, ErrorKind, Read, Write};

use crate::decoding::errors::DecodeError;
use std::vec::Vec;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StreamError {
    #[error(transparent)]
    Io(#[from] Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Compress everything `source` yields into `sink`. Returns the number of bytes written.
pub fn compress<R: Read, W: Write>(mut source: R, mut sink: W) -> Result<usize, Error> {
    let mut input = Vec::new();
    source.read_to_end(&mut input)?;
    let written = crate::encoding::encode_into(&input, &mut sink)?;
    sink.flush()?;
    Ok(written)
}

/// Decompress everything `source` yields into `sink`. Returns the number of bytes written.
pub fn decompress<R: Read, W: Write>(mut source: R, mut sink: W) -> Result<usize, StreamError> {
    let mut input = Vec::new();
    source.read_to_end(&mut input)?;
    let output = crate::decode(&input)?;
    sink.write_all(&output)?;
    sink.flush()?;
    Ok(output.len())
}
