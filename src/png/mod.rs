#![allow(nonstandard_style)]

//! Holds all the tools for encoding and decoding PNG datastreams.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Layout Of A PNG
//!
//! A PNG datastream is the 8 byte [`PNG_SIGNATURE`] followed by "chunks". Every
//! chunk has the same framing:
//!
//! ```text
//! length: u32 (big-endian) | chunk type: 4 ASCII letters | data: length bytes | CRC-32: u32 (big-endian)
//! ```
//!
//! The CRC covers the chunk type and data, not the length. The last chunk is
//! always `IEND`, and nothing may follow it.
//!
//! The case of each letter of a [`ChunkType`] is a flag. Most important is the
//! first letter: an uppercase first letter marks a "critical" chunk, which a
//! decoder must understand to make sense of the image. A lowercase first letter
//! marks an "ancillary" chunk, which may be skipped.
//!
//! ## Two Levels Of Decoding
//!
//! * [`RawChunkIter`] walks the chunk framing without allocating. It checks
//!   lengths and CRCs and hands out [`RawChunk`] values that borrow the input.
//! * [`Datastream::from_bytes`] goes all the way: it checks the signature,
//!   upgrades each raw chunk into a typed [`PngChunk`], requires the stream to
//!   end with `IEND`, and rejects any bytes after it. Unknown ancillary chunks
//!   are kept as [`GenericChunk`] values so that encoding the `Datastream`
//!   again gives back the exact input bytes. An unknown critical chunk is an
//!   error.
//!
//! Any error ends decoding. There's no attempt to skip a damaged chunk and
//! resynchronize, and no partial `Datastream` is returned.
//!
//! ## Encoding
//!
//! Build each chunk with its checked constructor (such as [`IHDR::new`] or
//! [`tEXt::new`]), put them in a [`Datastream`], and call
//! [`to_bytes`](Datastream::to_bytes). Chunks are written in the order given.
//! Nothing is reordered or added, so the caller is responsible for ending the
//! list with [`IEND`].
//!
//! ## Image Data
//!
//! `IDAT` payloads are zlib compressed, filtered scanlines. This module treats
//! them as opaque bytes. To get pixels, concatenate the
//! [`image_data`](Datastream::image_data) slices and hand them to a zlib
//! decompressor.

use core::{
  fmt::{Debug, Write},
  mem::size_of,
};

use bytemuck::{Pod, Zeroable};

use crate::{
  debug, trace, try_pull_byte_array, try_pull_u32_be, AsciiArray, PngError, PngResult, RGB8, U16BE,
  U32BE,
};

mod crc32;
pub use crc32::*;

mod chunk_type;
pub use chunk_type::*;

mod signature;
pub use signature::*;

mod raw_chunk;
pub use raw_chunk::*;

mod png_chunk;
pub use png_chunk::*;

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod idat;
pub use idat::*;

mod iend;
pub use iend::*;

mod text;
pub use text::*;

mod time;
pub use time::*;

mod chrm;
pub use chrm::*;

mod gama;
pub use gama::*;

mod datastream;
pub use datastream::*;
