use super::*;

/// Palette data
///
/// Spec: [PLTE](https://www.w3.org/TR/png/#11PLTE)
///
/// Palette entries are always RGB.
///
/// If you want to have a paletted image with transparency then the transparency
/// info goes in a separate transparency chunk.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PLTE(Vec<RGB8>);
impl From<Vec<RGB8>> for PLTE {
  #[inline]
  #[must_use]
  fn from(entries: Vec<RGB8>) -> Self {
    Self(entries)
  }
}
impl Debug for PLTE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    f.debug_tuple("PLTE").field(&&self.0[..self.0.len().min(4)]).field(&self.0.len()).finish()
  }
}
impl PLTE {
  #[inline]
  #[must_use]
  pub fn new(entries: Vec<RGB8>) -> Self {
    Self(entries)
  }
  /// Gets the entries as a slice.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[RGB8] {
    &self.0
  }
}
impl ChunkPayload for PLTE {
  const CHUNK_TYPE: ChunkType = ChunkType::PLTE;

  #[inline]
  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    match bytemuck::try_cast_slice::<u8, RGB8>(data) {
      Ok(entries) => Ok(Self(entries.to_vec())),
      Err(_) => Err(PngError::PaletteLength { len: data.len() }),
    }
  }

  #[inline]
  fn payload_len(&self) -> usize {
    self.0.len() * size_of::<RGB8>()
  }

  #[inline]
  fn write_payload(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::cast_slice(self.0.as_slice()));
  }
}
