use thiserror::Error;

use crate::{
  png::{ChunkType, PngColorType},
  AsciiArray,
};

/// Shorthand for results from this crate.
pub type PngResult<T> = Result<T, PngError>;

/// The broad class of a [`PngError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
  /// The bytes don't have the shape of a PNG: too short, too long, leftovers.
  Structural,
  /// A checksum or the signature didn't match.
  Integrity,
  /// The bytes have the right shape but a field holds an illegal value.
  Semantic,
  /// A critical chunk type that this crate can't interpret.
  UnknownCriticalChunk,
}

/// An error from encoding or decoding PNG data.
///
/// Every error is fatal to the operation that produced it. Offsets are byte
/// positions within the buffer that was being decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PngError {
  /// The input ended before a complete item could be read.
  #[error("truncated input at offset {offset}: needed {needed} bytes, {available} available")]
  Truncated {
    /// Where the incomplete item starts.
    offset: usize,
    /// Bytes required to finish the item.
    needed: usize,
    /// Bytes that were actually left.
    available: usize,
  },

  /// Chunk data is larger than the format allows (2^31 - 1 bytes).
  #[error("chunk data of {len} bytes exceeds the limit of {max} bytes")]
  PayloadTooLarge {
    /// The declared or actual data length.
    len: usize,
    /// [`MAX_CHUNK_DATA_LEN`](crate::png::MAX_CHUNK_DATA_LEN)
    max: usize,
  },

  /// Bytes were left over after the `IEND` chunk.
  #[error("{remaining} bytes of trailing data after IEND at offset {offset}")]
  TrailingData {
    /// Where the leftover bytes start.
    offset: usize,
    /// How many bytes were left over.
    remaining: usize,
  },

  /// A `PLTE` payload that isn't a whole number of RGB entries.
  #[error("PLTE data length {len} is not a multiple of 3")]
  PaletteLength {
    /// The payload length.
    len: usize,
  },

  /// A fixed-size chunk payload had the wrong size.
  #[error("{chunk_type} data must be {expected} bytes, got {actual}")]
  ChunkLength {
    /// Type of the chunk being decoded.
    chunk_type: ChunkType,
    /// The size the layout requires.
    expected: usize,
    /// The size that was present.
    actual: usize,
  },

  /// The stored CRC doesn't match the one computed from the chunk.
  #[error("{chunk_type} checksum mismatch at offset {offset}: stored {expected:#010X}, computed {actual:#010X}")]
  ChecksumMismatch {
    /// Type bytes of the damaged chunk, as found in the data.
    chunk_type: AsciiArray<4>,
    /// The CRC stored in the data stream.
    expected: u32,
    /// The CRC computed over the chunk type and data.
    actual: u32,
    /// Where the stored CRC is.
    offset: usize,
  },

  /// The first 8 bytes are not the PNG signature.
  #[error("the data does not start with the PNG signature")]
  BadSignature,

  /// A chunk type that isn't exactly four ASCII letters.
  #[error("invalid chunk type {0:?}")]
  InvalidChunkType(AsciiArray<4>),

  /// A numeric field outside of its legal range.
  #[error("{chunk_type} field `{field}` out of range: {value}")]
  OutOfRange {
    /// Type of the chunk the field belongs to.
    chunk_type: ChunkType,
    /// Name of the field.
    field: &'static str,
    /// The rejected value.
    value: i64,
  },

  /// A bit depth that the color type doesn't allow.
  #[error("bit depth {bit_depth} is not allowed for color type {color_type:?}")]
  InvalidBitDepth {
    /// The header's color type.
    color_type: PngColorType,
    /// The rejected bit depth.
    bit_depth: u8,
  },

  /// An unknown color type code.
  #[error("{chunk_type} field `color_type` holds unknown code {value}")]
  InvalidColorType {
    /// Type of the chunk the field belongs to.
    chunk_type: ChunkType,
    /// The rejected code.
    value: u8,
  },

  /// A text keyword that isn't 1 to 79 characters long.
  #[error("{chunk_type} field `keyword` must be 1 to 79 characters, got {len}")]
  KeywordLength {
    /// Type of the chunk the keyword belongs to.
    chunk_type: ChunkType,
    /// The keyword length in characters.
    len: usize,
  },

  /// A text field that contains a NUL character.
  #[error("{chunk_type} field `{field}` contains a NUL character")]
  NulInText {
    /// Type of the chunk the field belongs to.
    chunk_type: ChunkType,
    /// Name of the field.
    field: &'static str,
  },

  /// A text field with a character that Latin-1 can't encode.
  #[error("{chunk_type} field `{field}` contains {ch:?}, which is not Latin-1")]
  NotLatin1 {
    /// Type of the chunk the field belongs to.
    chunk_type: ChunkType,
    /// Name of the field.
    field: &'static str,
    /// The first offending character.
    ch: char,
  },

  /// A real-valued field holding NaN or an infinity.
  #[error("{chunk_type} field `{field}` is not finite")]
  NonFinite {
    /// Type of the chunk the field belongs to.
    chunk_type: ChunkType,
    /// Name of the field.
    field: &'static str,
  },

  /// A critical chunk that has no decoder.
  #[error("unknown critical chunk {chunk_type}")]
  UnknownCriticalChunk {
    /// The unrecognized chunk type.
    chunk_type: ChunkType,
  },

  /// A chunk type that has a typed decoder, offered as an opaque chunk.
  #[error("{chunk_type} has a typed decoder and can't be kept as an opaque chunk")]
  NotOpaque {
    /// The registered chunk type.
    chunk_type: ChunkType,
  },

  /// Another error, raised by the chunk that starts at `offset`.
  #[error("chunk at offset {offset}: {source}")]
  AtOffset {
    /// Where the chunk's length field is.
    offset: usize,
    /// What went wrong with the chunk.
    #[source]
    source: Box<PngError>,
  },
}
impl PngError {
  /// Which class of failure this is.
  ///
  /// An [`AtOffset`](Self::AtOffset) error has the kind of the error it wraps.
  #[inline]
  #[must_use]
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Truncated { .. }
      | Self::PayloadTooLarge { .. }
      | Self::TrailingData { .. }
      | Self::PaletteLength { .. }
      | Self::ChunkLength { .. } => ErrorKind::Structural,
      Self::ChecksumMismatch { .. } | Self::BadSignature => ErrorKind::Integrity,
      Self::InvalidChunkType(_)
      | Self::OutOfRange { .. }
      | Self::InvalidBitDepth { .. }
      | Self::InvalidColorType { .. }
      | Self::KeywordLength { .. }
      | Self::NulInText { .. }
      | Self::NotLatin1 { .. }
      | Self::NonFinite { .. }
      | Self::NotOpaque { .. } => ErrorKind::Semantic,
      Self::UnknownCriticalChunk { .. } => ErrorKind::UnknownCriticalChunk,
      Self::AtOffset { source, .. } => source.kind(),
    }
  }

  /// Wraps this error with the offset of the chunk that raised it.
  #[inline]
  #[must_use]
  pub fn at_offset(self, offset: usize) -> Self {
    Self::AtOffset { offset, source: Box::new(self) }
  }

  /// The byte position this error points at, if it has one.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> Option<usize> {
    match self {
      Self::Truncated { offset, .. }
      | Self::TrailingData { offset, .. }
      | Self::ChecksumMismatch { offset, .. }
      | Self::AtOffset { offset, .. } => Some(*offset),
      _ => None,
    }
  }

  /// The error underneath any [`AtOffset`](Self::AtOffset) wrapping.
  #[inline]
  #[must_use]
  pub fn root(&self) -> &Self {
    match self {
      Self::AtOffset { source, .. } => source.root(),
      other => other,
    }
  }
}
