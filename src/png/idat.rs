use super::*;

/// Image Data.
///
/// Spec: [IDAT](https://www.w3.org/TR/png/#11IDAT)
///
/// * Image data is stored with Zlib compression applied.
/// * Images can have more than one IDAT chunk. They should all be stored in a
///   row. Multiple chunks are treated as a single Zlib datastream.
///
/// The data is kept exactly as given, nothing checks that it's valid zlib.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IDAT(Vec<u8>);
impl From<Vec<u8>> for IDAT {
  #[inline]
  #[must_use]
  fn from(data: Vec<u8>) -> Self {
    Self(data)
  }
}
impl Debug for IDAT {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("IDAT").field(&&self.0[..self.0.len().min(12)]).field(&self.0.len()).finish()
  }
}
impl IDAT {
  #[inline]
  #[must_use]
  pub fn new(data: Vec<u8>) -> Self {
    Self(data)
  }
  /// The compressed bytes.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.0
  }
  #[inline]
  #[must_use]
  pub fn into_data(self) -> Vec<u8> {
    self.0
  }
}
impl ChunkPayload for IDAT {
  const CHUNK_TYPE: ChunkType = ChunkType::IDAT;

  #[inline]
  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    Ok(Self(data.to_vec()))
  }

  #[inline]
  fn payload_len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  fn write_payload(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(&self.0);
  }
}
