use super::*;

/// The four letter type code of a chunk.
///
/// A chunk type is always exactly four ASCII letters. The case of each letter
/// carries a flag, tested with bit 5 (`0x20`, clear for uppercase):
///
/// | position | uppercase | lowercase |
/// |:-:|:-|:-|
/// | 0 | critical | ancillary |
/// | 1 | public | private |
/// | 2 | reserved (must be uppercase today) | unreserved |
/// | 3 | unsafe to copy | safe to copy |
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType([u8; 4]);
impl ChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const tEXt: Self = Self(*b"tEXt");
  pub const tIME: Self = Self(*b"tIME");
  pub const cHRM: Self = Self(*b"cHRM");
  pub const gAMA: Self = Self(*b"gAMA");

  /// Makes a chunk type, failing unless all four bytes are ASCII letters.
  #[inline]
  pub const fn new(bytes: [u8; 4]) -> PngResult<Self> {
    let mut i = 0;
    while i < 4 {
      if !bytes[i].is_ascii_alphabetic() {
        return Err(PngError::InvalidChunkType(AsciiArray(bytes)));
      }
      i += 1;
    }
    Ok(Self(bytes))
  }

  #[inline]
  #[must_use]
  const fn is_upper_at(self, index: usize) -> bool {
    (self.0[index] & 0x20) == 0
  }

  /// If a decoder must understand this chunk to show the image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    self.is_upper_at(0)
  }

  /// If this is a chunk type defined by the PNG spec (or registered).
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    self.is_upper_at(1)
  }

  /// If the reserved bit is in its (currently mandatory) uppercase state.
  #[inline]
  #[must_use]
  pub const fn is_reserved(self) -> bool {
    self.is_upper_at(2)
  }

  /// If an editor that doesn't understand this chunk may still copy it when
  /// it modifies the critical chunks.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    !self.is_upper_at(3)
  }

  /// The four bytes of the type code.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }

  /// The type code as text.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    // all four bytes are ASCII letters, so this never fails.
    core::str::from_utf8(&self.0).unwrap_or("????")
  }
}
impl Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('"')?;
    f.write_str(self.as_str())?;
    f.write_char('"')
  }
}
impl core::fmt::Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}
impl TryFrom<[u8; 4]> for ChunkType {
  type Error = PngError;
  #[inline]
  fn try_from(bytes: [u8; 4]) -> Result<Self, Self::Error> {
    Self::new(bytes)
  }
}
impl core::str::FromStr for ChunkType {
  type Err = PngError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.as_bytes() {
      [a, b, c, d] => Self::new([*a, *b, *c, *d]),
      other => {
        let mut bytes = [0_u8; 4];
        for (dst, src) in bytes.iter_mut().zip(other) {
          *dst = *src;
        }
        Err(PngError::InvalidChunkType(AsciiArray(bytes)))
      }
    }
  }
}
impl From<ChunkType> for [u8; 4] {
  #[inline]
  #[must_use]
  fn from(ty: ChunkType) -> Self {
    ty.0
  }
}
