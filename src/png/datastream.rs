use super::*;

/// A whole PNG: the signature and then every chunk, in order.
///
/// A `Datastream` decoded with [`from_bytes`](Self::from_bytes) always ends
/// with exactly one [`PngChunk::IEND`]. One built with [`new`](Self::new) holds
/// whatever chunks it's given, so it's up to the caller to end the list with
/// `IEND` if the output should decode again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Datastream {
  signature: PngSignature,
  chunks: Vec<PngChunk>,
}
impl Datastream {
  #[inline]
  #[must_use]
  pub const fn new(chunks: Vec<PngChunk>) -> Self {
    Self { signature: PngSignature, chunks }
  }

  /// Decodes a complete PNG.
  ///
  /// Chunks are read until the first `IEND`. After that there must be no more
  /// bytes.
  ///
  /// ## Failure
  /// * The signature is wrong, or there's less than 8 bytes.
  /// * Any chunk fails to decode or upgrade (see [`RawChunk::decode`] and
  ///   [`PngChunk::try_from`]). An upgrade error is wrapped in
  ///   [`AtOffset`](PngError::AtOffset) with the offset of the chunk.
  /// * The bytes run out before `IEND` (this is a
  ///   [`Truncated`](PngError::Truncated) error).
  /// * There are bytes after `IEND`.
  pub fn from_bytes(bytes: &[u8]) -> PngResult<Self> {
    let mut it = RawChunkIter::from_png_bytes(bytes)?;
    let mut chunks = Vec::new();
    loop {
      let raw = it.next_chunk()?;
      let start = it.offset() - raw.length();
      trace!(offset = start, chunk_type = %raw.chunk_type(), len = raw.data().len(), "chunk");
      let chunk = PngChunk::try_from(raw).map_err(|e| e.at_offset(start))?;
      let is_end = matches!(chunk, PngChunk::IEND);
      chunks.push(chunk);
      if is_end {
        trace!(offset = it.offset(), "reached IEND");
        break;
      }
    }
    let remaining = it.remaining().len();
    if remaining != 0 {
      return Err(PngError::TrailingData { offset: it.offset(), remaining });
    }
    debug!(chunks = chunks.len(), bytes = bytes.len(), "decoded datastream");
    Ok(Self { signature: PngSignature, chunks })
  }

  /// Appends the signature and then every chunk, in order, to `out`.
  ///
  /// Fails if a chunk's data is over [`MAX_CHUNK_DATA_LEN`]. In that case
  /// `out` is left holding whatever was written before the bad chunk.
  pub fn write_to(&self, out: &mut Vec<u8>) -> PngResult<()> {
    out.extend_from_slice(&self.signature.to_bytes());
    for chunk in &self.chunks {
      chunk.write_to(out)?;
    }
    Ok(())
  }

  /// Encodes the whole PNG.
  pub fn to_bytes(&self) -> PngResult<Vec<u8>> {
    let total = PngSignature::LEN + self.chunks.iter().map(PngChunk::length).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    self.write_to(&mut out)?;
    debug!(chunks = self.chunks.len(), bytes = out.len(), "encoded datastream");
    Ok(out)
  }

  #[inline]
  #[must_use]
  pub const fn signature(&self) -> PngSignature {
    self.signature
  }
  #[inline]
  #[must_use]
  pub fn chunks(&self) -> &[PngChunk] {
    &self.chunks
  }
  #[inline]
  #[must_use]
  pub fn into_chunks(self) -> Vec<PngChunk> {
    self.chunks
  }
  /// Number of chunks, `IEND` included.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.chunks.len()
  }
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  /// The first `IHDR`, if any.
  #[inline]
  #[must_use]
  pub fn header(&self) -> Option<&IHDR> {
    self.chunks.iter().find_map(PngChunk::to_ihdr)
  }
  /// The first `PLTE`, if any.
  #[inline]
  #[must_use]
  pub fn palette(&self) -> Option<&PLTE> {
    self.chunks.iter().find_map(PngChunk::to_plte)
  }
  /// The data of every `IDAT`, in order.
  ///
  /// Concatenated, these form one zlib stream.
  #[inline]
  pub fn image_data(&self) -> impl Iterator<Item = &[u8]> + '_ {
    self.chunks.iter().filter_map(PngChunk::to_idat).map(IDAT::data)
  }
  /// Every `tEXt`, in order.
  #[inline]
  pub fn text_entries(&self) -> impl Iterator<Item = &tEXt> + '_ {
    self.chunks.iter().filter_map(PngChunk::to_text)
  }
  /// The first `tIME`, if any.
  #[inline]
  #[must_use]
  pub fn time(&self) -> Option<&tIME> {
    self.chunks.iter().find_map(PngChunk::to_time)
  }
  /// The first `cHRM`, if any.
  #[inline]
  #[must_use]
  pub fn chromaticities(&self) -> Option<&cHRM> {
    self.chunks.iter().find_map(PngChunk::to_chrm)
  }
  /// The first `gAMA`, if any.
  #[inline]
  #[must_use]
  pub fn gamma(&self) -> Option<&gAMA> {
    self.chunks.iter().find_map(PngChunk::to_gama)
  }
}
impl FromIterator<PngChunk> for Datastream {
  #[inline]
  fn from_iter<I: IntoIterator<Item = PngChunk>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
impl TryFrom<&[u8]> for Datastream {
  type Error = PngError;
  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Self::from_bytes(bytes)
  }
}
