#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A structural codec for PNG datastreams.
//!
//! A PNG file is an 8 byte signature followed by a sequence of "chunks". Each
//! chunk is a big-endian length, a four letter chunk type, the chunk data, and
//! a CRC-32 over the type and data. This crate turns those bytes into a
//! [`Datastream`](png::Datastream) of typed chunks and turns a `Datastream`
//! back into bytes, reproducing the input exactly.
//!
//! The codec checks every structural rule of the chunk layer (signature,
//! lengths, checksums, the `IEND` terminator, nothing after it) and the field
//! rules of each chunk type it knows. It does *not* decompress or unfilter the
//! image data: `IDAT` payloads are carried along as opaque bytes.
//!
//! ## Crate Features
//! * `tracing` (default): emit `tracing` events while encoding and decoding.

/// Internal `trace!`, becomes a `tracing` event when the feature is on.
macro_rules! trace {
  ($($arg:tt)*) => {{
    #[cfg(feature = "tracing")]
    tracing::trace!($($arg)*);
  }};
}
pub(crate) use trace;

/// Internal `debug!`, becomes a `tracing` event when the feature is on.
macro_rules! debug {
  ($($arg:tt)*) => {{
    #[cfg(feature = "tracing")]
    tracing::debug!($($arg)*);
  }};
}
pub(crate) use debug;

pub mod ascii_array;
pub use ascii_array::*;

pub mod error;
pub use error::*;

pub mod int_endian;
pub use int_endian::*;

pub mod pixel_formats;
pub use pixel_formats::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;
