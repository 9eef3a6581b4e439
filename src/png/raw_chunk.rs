use super::*;

/// The largest amount of data a single chunk may hold, `2^31 - 1` bytes.
pub const MAX_CHUNK_DATA_LEN: usize = (1 << 31) - 1;

/// Bytes a chunk takes beyond its data: length, type, and CRC.
pub const CHUNK_OVERHEAD: usize = 4 + 4 + 4;

/// Fails if `len` bytes of data won't fit in one chunk.
#[inline]
pub const fn check_chunk_data_len(len: usize) -> PngResult<()> {
  if len > MAX_CHUNK_DATA_LEN {
    Err(PngError::PayloadTooLarge { len, max: MAX_CHUNK_DATA_LEN })
  } else {
    Ok(())
  }
}

/// Appends the full framing of one chunk to `out`.
///
/// Writes the big-endian data length, the chunk type, the data, and the
/// big-endian CRC of the type and data.
pub fn write_chunk(chunk_type: ChunkType, data: &[u8], out: &mut Vec<u8>) -> PngResult<()> {
  check_chunk_data_len(data.len())?;
  let type_bytes = chunk_type.to_bytes();
  out.reserve(CHUNK_OVERHEAD + data.len());
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(&type_bytes);
  out.extend_from_slice(data);
  out.extend_from_slice(&png_crc(&type_bytes, data).to_be_bytes());
  Ok(())
}

/// An unparsed chunk from a PNG.
///
/// The CRC has been checked when this value was made by [`RawChunk::decode`]
/// or a [`RawChunkIter`], but the data hasn't been interpreted at all.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawChunk<'b> {
  chunk_type: ChunkType,
  data: &'b [u8],
  declared_crc: u32,
}
impl Debug for RawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawChunk")
      .field("chunk_type", &self.chunk_type)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl<'b> RawChunk<'b> {
  #[inline]
  #[must_use]
  pub const fn chunk_type(&self) -> ChunkType {
    self.chunk_type
  }
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  #[inline]
  #[must_use]
  pub fn actual_crc(&self) -> u32 {
    png_crc(&self.chunk_type.to_bytes(), self.data)
  }
  /// Total bytes this chunk occupies in the data stream.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> usize {
    CHUNK_OVERHEAD + self.data.len()
  }

  /// Decodes the chunk at the start of `bytes`.
  ///
  /// Returns the chunk and the number of bytes it used, which is always
  /// `12 + data.len()`. Anything after that in `bytes` is ignored.
  ///
  /// ## Failure
  /// * [`Truncated`](PngError::Truncated) if `bytes` ends before the chunk.
  /// * [`PayloadTooLarge`](PngError::PayloadTooLarge) if the declared length
  ///   is over [`MAX_CHUNK_DATA_LEN`].
  /// * [`ChecksumMismatch`](PngError::ChecksumMismatch) if the stored CRC is
  ///   wrong.
  /// * [`InvalidChunkType`](PngError::InvalidChunkType) if the (correctly
  ///   checksummed) type isn't four ASCII letters.
  ///
  /// The last two are wrapped in [`AtOffset`](PngError::AtOffset) with the
  /// chunk's position, the others carry an offset of their own.
  #[inline]
  pub fn decode(bytes: &'b [u8]) -> PngResult<(Self, usize)> {
    Self::decode_at(bytes, 0)
  }

  /// As [`decode`](Self::decode), with error offsets shifted by `base`.
  pub(crate) fn decode_at(bytes: &'b [u8], base: usize) -> PngResult<(Self, usize)> {
    if bytes.len() < CHUNK_OVERHEAD {
      return Err(PngError::Truncated {
        offset: base,
        needed: CHUNK_OVERHEAD,
        available: bytes.len(),
      });
    }
    let (declared_len, rest) = try_pull_u32_be(bytes, base)?;
    let len = declared_len as usize;
    check_chunk_data_len(len).map_err(|e| e.at_offset(base))?;
    let (type_bytes, rest) = try_pull_byte_array::<4>(rest, base + 4)?;
    if rest.len() < len + 4 {
      return Err(PngError::Truncated {
        offset: base,
        needed: CHUNK_OVERHEAD + len,
        available: bytes.len(),
      });
    }
    let (data, rest) = rest.split_at(len);
    let crc_offset = base + 8 + len;
    let (declared_crc, _) = try_pull_u32_be(rest, crc_offset)?;
    // the CRC is checked before the type, so damage anywhere in the type or
    // data shows up as a checksum failure.
    let actual = png_crc(&type_bytes, data);
    if declared_crc != actual {
      return Err(PngError::ChecksumMismatch {
        chunk_type: AsciiArray(type_bytes),
        expected: declared_crc,
        actual,
        offset: crc_offset,
      });
    }
    let chunk_type = ChunkType::new(type_bytes).map_err(|e| e.at_offset(base))?;
    Ok((Self { chunk_type, data, declared_crc }, CHUNK_OVERHEAD + len))
  }

  /// Copies this chunk into an owned [`GenericChunk`].
  #[inline]
  #[must_use]
  pub fn to_generic(&self) -> GenericChunk {
    GenericChunk { chunk_type: self.chunk_type, data: self.data.to_vec() }
  }
}

/// A chunk kept as its type and raw data.
///
/// This is how chunks that have no typed decoder are stored, so that they can
/// be written back out unchanged.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenericChunk {
  chunk_type: ChunkType,
  data: Vec<u8>,
}
impl Debug for GenericChunk {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("GenericChunk")
      .field("chunk_type", &self.chunk_type)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .finish()
  }
}
impl GenericChunk {
  /// Makes a chunk, failing if `data` is over [`MAX_CHUNK_DATA_LEN`].
  #[inline]
  pub fn new(chunk_type: ChunkType, data: Vec<u8>) -> PngResult<Self> {
    check_chunk_data_len(data.len())?;
    Ok(Self { chunk_type, data })
  }
  #[inline]
  #[must_use]
  pub const fn chunk_type(&self) -> ChunkType {
    self.chunk_type
  }
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }
  #[inline]
  #[must_use]
  pub fn into_data(self) -> Vec<u8> {
    self.data
  }
  /// Total bytes this chunk occupies when written.
  #[inline]
  #[must_use]
  pub fn length(&self) -> usize {
    CHUNK_OVERHEAD + self.data.len()
  }

  /// Decodes the chunk at the start of `bytes`, see [`RawChunk::decode`].
  #[inline]
  pub fn decode(bytes: &[u8]) -> PngResult<(Self, usize)> {
    RawChunk::decode(bytes).map(|(raw, used)| (raw.to_generic(), used))
  }

  /// Appends this chunk's bytes to `out`.
  #[inline]
  pub fn write_to(&self, out: &mut Vec<u8>) -> PngResult<()> {
    write_chunk(self.chunk_type, &self.data, out)
  }

  /// This chunk's bytes.
  #[inline]
  pub fn to_bytes(&self) -> PngResult<Vec<u8>> {
    let mut out = Vec::with_capacity(self.length());
    self.write_to(&mut out)?;
    Ok(out)
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Each item is a checked [`RawChunk`] or the error that stopped the walk.
/// After an error the iterator is finished. Reaching `IEND` does *not* stop
/// the iterator, it keeps going as long as there are bytes left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawChunkIter<'b> {
  bytes: &'b [u8],
  offset: usize,
  failed: bool,
}
impl<'b> RawChunkIter<'b> {
  /// Iterates chunks starting right at the front of `bytes` (no signature).
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, offset: 0, failed: false }
  }

  /// Checks the PNG signature and iterates the chunks that follow it.
  #[inline]
  pub fn from_png_bytes(bytes: &'b [u8]) -> PngResult<Self> {
    let (_, rest) = PngSignature::strip(bytes)?;
    Ok(Self { bytes: rest, offset: PngSignature::LEN, failed: false })
  }

  /// The bytes not yet decoded.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.bytes
  }

  /// Position of the next chunk, relative to the start of the original input.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  /// Decodes the next chunk.
  ///
  /// Unlike [`next`](Iterator::next), running out of bytes is an error
  /// ([`Truncated`](PngError::Truncated)) rather than the end of iteration.
  pub fn next_chunk(&mut self) -> PngResult<RawChunk<'b>> {
    let (raw, used) = RawChunk::decode_at(self.bytes, self.offset)?;
    self.bytes = &self.bytes[used..];
    self.offset += used;
    Ok(raw)
  }
}
impl<'b> Iterator for RawChunkIter<'b> {
  type Item = PngResult<RawChunk<'b>>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.failed || self.bytes.is_empty() {
      return None;
    }
    let out = self.next_chunk();
    self.failed = out.is_err();
    Some(out)
  }
}
impl core::iter::FusedIterator for RawChunkIter<'_> {}

#[cfg(test)]
mod tests {
  use super::*;

  fn text_chunk_bytes() -> Vec<u8> {
    let mut v = Vec::new();
    write_chunk(ChunkType::tEXt, &[], &mut v).unwrap();
    v
  }

  #[test]
  fn test_write_empty_text_chunk() {
    assert_eq!(text_chunk_bytes(), [0, 0, 0, 0, 0x74, 0x45, 0x58, 0x74, 0x96, 0x42, 0xC5, 0x85]);
  }

  #[test]
  fn test_decode_round_trip() {
    let bytes = text_chunk_bytes();
    let (raw, used) = RawChunk::decode(&bytes).unwrap();
    assert_eq!(used, 12);
    assert_eq!(raw.chunk_type(), ChunkType::tEXt);
    assert_eq!(raw.data(), &[]);
    assert_eq!(raw.declared_crc(), raw.actual_crc());
    assert_eq!(raw.length(), 12);

    let generic = GenericChunk::new(ChunkType::tEXt, Vec::new()).unwrap();
    assert_eq!(GenericChunk::decode(&bytes).unwrap(), (generic.clone(), 12));
    assert_eq!(generic.to_bytes().unwrap(), bytes);
  }

  #[test]
  fn test_decode_ignores_what_follows() {
    let mut bytes = Vec::new();
    write_chunk(ChunkType::IDAT, &[1, 2, 3], &mut bytes).unwrap();
    bytes.extend_from_slice(&[9, 9, 9]);
    let (raw, used) = RawChunk::decode(&bytes).unwrap();
    assert_eq!(used, 15);
    assert_eq!(raw.data(), &[1, 2, 3]);
  }

  #[test]
  fn test_decode_truncated() {
    let mut bytes = Vec::new();
    write_chunk(ChunkType::IDAT, &[1, 2, 3], &mut bytes).unwrap();
    for cut in 0..bytes.len() {
      let err = RawChunk::decode(&bytes[..cut]).unwrap_err();
      assert!(matches!(err, PngError::Truncated { offset: 0, .. }), "cut {cut}: {err:?}");
    }
  }

  #[test]
  fn test_decode_checksum_mismatch() {
    let mut bytes = text_chunk_bytes();
    bytes[11] ^= 0x01;
    let err = RawChunk::decode(&bytes).unwrap_err();
    assert_eq!(
      err,
      PngError::ChecksumMismatch {
        chunk_type: AsciiArray(*b"tEXt"),
        expected: 0x9642_C584,
        actual: 0x9642_C585,
        offset: 8,
      }
    );
  }

  #[test]
  fn test_decode_bad_type_with_good_crc() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0_u32.to_be_bytes());
    bytes.extend_from_slice(b"ab1d");
    bytes.extend_from_slice(&png_crc(b"ab1d", &[]).to_be_bytes());
    assert_eq!(
      RawChunk::decode(&bytes),
      Err(PngError::InvalidChunkType(AsciiArray(*b"ab1d")).at_offset(0))
    );
    let mut stream = vec![0; 5];
    stream.extend_from_slice(&bytes);
    let err = RawChunk::decode_at(&stream[5..], 5).unwrap_err();
    assert_eq!(err.offset(), Some(5));
    assert_eq!(err.root(), &PngError::InvalidChunkType(AsciiArray(*b"ab1d")));
  }

  #[test]
  fn test_decode_declared_length_too_large() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x8000_0000_u32.to_be_bytes());
    bytes.extend_from_slice(b"IDAT");
    bytes.extend_from_slice(&[0; 4]);
    assert_eq!(
      RawChunk::decode(&bytes),
      Err(PngError::PayloadTooLarge { len: 0x8000_0000, max: MAX_CHUNK_DATA_LEN }.at_offset(0))
    );
  }

  #[test]
  fn test_check_chunk_data_len() {
    assert!(check_chunk_data_len(0).is_ok());
    assert!(check_chunk_data_len(MAX_CHUNK_DATA_LEN).is_ok());
    assert_eq!(
      check_chunk_data_len(MAX_CHUNK_DATA_LEN + 1),
      Err(PngError::PayloadTooLarge { len: MAX_CHUNK_DATA_LEN + 1, max: MAX_CHUNK_DATA_LEN })
    );
  }

  #[test]
  fn test_iter() {
    let mut bytes = PNG_SIGNATURE.to_vec();
    write_chunk(ChunkType::IDAT, &[7], &mut bytes).unwrap();
    write_chunk(ChunkType::IEND, &[], &mut bytes).unwrap();
    let mut it = RawChunkIter::from_png_bytes(&bytes).unwrap();
    assert_eq!(it.offset(), 8);
    assert_eq!(it.next().unwrap().unwrap().chunk_type(), ChunkType::IDAT);
    assert_eq!(it.offset(), 8 + 13);
    assert_eq!(it.next().unwrap().unwrap().chunk_type(), ChunkType::IEND);
    assert!(it.remaining().is_empty());
    assert!(it.next().is_none());
    assert_eq!(
      it.next_chunk(),
      Err(PngError::Truncated { offset: 33, needed: CHUNK_OVERHEAD, available: 0 })
    );
  }

  #[test]
  fn test_iter_stops_after_error() {
    let mut bytes = Vec::new();
    write_chunk(ChunkType::IDAT, &[7], &mut bytes).unwrap();
    bytes.extend_from_slice(&[0, 0, 0]);
    let mut it = RawChunkIter::new(&bytes);
    assert!(it.next().unwrap().is_ok());
    assert_eq!(
      it.next().unwrap(),
      Err(PngError::Truncated { offset: 13, needed: CHUNK_OVERHEAD, available: 3 })
    );
    assert!(it.next().is_none());
  }

  #[test]
  fn test_iter_rejects_bad_signature() {
    assert_eq!(RawChunkIter::from_png_bytes(&[0; 20]), Err(PngError::BadSignature));
  }
}
