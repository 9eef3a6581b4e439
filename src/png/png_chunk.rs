use super::*;

/// A chunk type with a typed representation of its data.
pub trait ChunkPayload: Sized {
  /// The chunk type this payload is stored under.
  const CHUNK_TYPE: ChunkType;

  /// Parses chunk data (without the length, type, or CRC).
  fn decode_payload(data: &[u8]) -> PngResult<Self>;

  /// The number of data bytes [`write_payload`](Self::write_payload) appends.
  fn payload_len(&self) -> usize;

  /// Appends the chunk data to `out`.
  fn write_payload(&self, out: &mut Vec<u8>);

  /// The chunk data as a new buffer.
  #[inline]
  fn to_payload(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.payload_len());
    self.write_payload(&mut out);
    out
  }
}

/// A parsed PNG chunk
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PngChunk {
  /// Image Header
  IHDR(IHDR),
  /// Palette
  PLTE(PLTE),
  /// Image Data
  IDAT(IDAT),
  /// Image End
  IEND,
  /// Textual data
  tEXt(tEXt),
  /// Last-modification time
  tIME(tIME),
  /// Primary chromaticities and white point
  cHRM(cHRM),
  /// Image gamma
  gAMA(gAMA),
  /// An ancillary chunk type without a decoder, kept as-is.
  ///
  /// Build this with `PngChunk::try_from(generic)`, which refuses any chunk
  /// type that wouldn't decode back into this variant.
  Generic(GenericChunk),
}
impl PngChunk {
  #[inline]
  #[must_use]
  pub fn chunk_type(&self) -> ChunkType {
    match self {
      Self::IHDR(_) => IHDR::CHUNK_TYPE,
      Self::PLTE(_) => PLTE::CHUNK_TYPE,
      Self::IDAT(_) => IDAT::CHUNK_TYPE,
      Self::IEND => IEND::CHUNK_TYPE,
      Self::tEXt(_) => tEXt::CHUNK_TYPE,
      Self::tIME(_) => tIME::CHUNK_TYPE,
      Self::cHRM(_) => cHRM::CHUNK_TYPE,
      Self::gAMA(_) => gAMA::CHUNK_TYPE,
      Self::Generic(g) => g.chunk_type(),
    }
  }

  /// The number of data bytes in this chunk.
  #[must_use]
  pub fn payload_len(&self) -> usize {
    match self {
      Self::IHDR(x) => x.payload_len(),
      Self::PLTE(x) => x.payload_len(),
      Self::IDAT(x) => x.payload_len(),
      Self::IEND => IEND.payload_len(),
      Self::tEXt(x) => x.payload_len(),
      Self::tIME(x) => x.payload_len(),
      Self::cHRM(x) => x.payload_len(),
      Self::gAMA(x) => x.payload_len(),
      Self::Generic(g) => g.data().len(),
    }
  }

  /// Total bytes this chunk occupies when written: data plus 12.
  #[inline]
  #[must_use]
  pub fn length(&self) -> usize {
    CHUNK_OVERHEAD + self.payload_len()
  }

  /// Appends the chunk data (only) to `out`.
  pub fn write_payload(&self, out: &mut Vec<u8>) {
    match self {
      Self::IHDR(x) => x.write_payload(out),
      Self::PLTE(x) => x.write_payload(out),
      Self::IDAT(x) => x.write_payload(out),
      Self::IEND => IEND.write_payload(out),
      Self::tEXt(x) => x.write_payload(out),
      Self::tIME(x) => x.write_payload(out),
      Self::cHRM(x) => x.write_payload(out),
      Self::gAMA(x) => x.write_payload(out),
      Self::Generic(g) => out.extend_from_slice(g.data()),
    }
  }

  /// The chunk data (only) as a new buffer.
  #[inline]
  #[must_use]
  pub fn to_payload(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.payload_len());
    self.write_payload(&mut out);
    out
  }

  /// Appends the full chunk (length, type, data, CRC) to `out`.
  ///
  /// Fails if the data is over [`MAX_CHUNK_DATA_LEN`].
  pub fn write_to(&self, out: &mut Vec<u8>) -> PngResult<()> {
    match self {
      // these already hold their data as bytes, so skip the copy.
      Self::IDAT(idat) => write_chunk(IDAT::CHUNK_TYPE, idat.data(), out),
      Self::Generic(g) => g.write_to(out),
      other => write_chunk(other.chunk_type(), &other.to_payload(), out),
    }
  }

  /// The full chunk (length, type, data, CRC) as a new buffer.
  #[inline]
  pub fn to_bytes(&self) -> PngResult<Vec<u8>> {
    let mut out = Vec::with_capacity(self.length());
    self.write_to(&mut out)?;
    Ok(out)
  }

  #[inline]
  #[must_use]
  pub fn is_critical(&self) -> bool {
    self.chunk_type().is_critical()
  }
  #[inline]
  #[must_use]
  pub fn is_public(&self) -> bool {
    self.chunk_type().is_public()
  }
  #[inline]
  #[must_use]
  pub fn is_reserved(&self) -> bool {
    self.chunk_type().is_reserved()
  }
  #[inline]
  #[must_use]
  pub fn is_safe_to_copy(&self) -> bool {
    self.chunk_type().is_safe_to_copy()
  }

  #[inline]
  #[must_use]
  pub const fn to_ihdr(&self) -> Option<&IHDR> {
    match self {
      Self::IHDR(ihdr) => Some(ihdr),
      _ => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn to_plte(&self) -> Option<&PLTE> {
    match self {
      Self::PLTE(plte) => Some(plte),
      _ => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn to_idat(&self) -> Option<&IDAT> {
    match self {
      Self::IDAT(idat) => Some(idat),
      _ => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn to_text(&self) -> Option<&tEXt> {
    match self {
      Self::tEXt(text) => Some(text),
      _ => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn to_time(&self) -> Option<&tIME> {
    match self {
      Self::tIME(time) => Some(time),
      _ => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn to_chrm(&self) -> Option<&cHRM> {
    match self {
      Self::cHRM(chrm) => Some(chrm),
      _ => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn to_gama(&self) -> Option<&gAMA> {
    match self {
      Self::gAMA(gama) => Some(gama),
      _ => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn to_generic(&self) -> Option<&GenericChunk> {
    match self {
      Self::Generic(g) => Some(g),
      _ => None,
    }
  }
}
impl From<IHDR> for PngChunk {
  #[inline]
  fn from(x: IHDR) -> Self {
    Self::IHDR(x)
  }
}
impl From<PLTE> for PngChunk {
  #[inline]
  fn from(x: PLTE) -> Self {
    Self::PLTE(x)
  }
}
impl From<IDAT> for PngChunk {
  #[inline]
  fn from(x: IDAT) -> Self {
    Self::IDAT(x)
  }
}
impl From<IEND> for PngChunk {
  #[inline]
  fn from(_: IEND) -> Self {
    Self::IEND
  }
}
impl From<tEXt> for PngChunk {
  #[inline]
  fn from(x: tEXt) -> Self {
    Self::tEXt(x)
  }
}
impl From<tIME> for PngChunk {
  #[inline]
  fn from(x: tIME) -> Self {
    Self::tIME(x)
  }
}
impl From<cHRM> for PngChunk {
  #[inline]
  fn from(x: cHRM) -> Self {
    Self::cHRM(x)
  }
}
impl From<gAMA> for PngChunk {
  #[inline]
  fn from(x: gAMA) -> Self {
    Self::gAMA(x)
  }
}
impl TryFrom<GenericChunk> for PngChunk {
  type Error = PngError;
  /// Wraps an opaque chunk, as long as decoding it would give it back.
  ///
  /// * Chunk types with a typed decoder fail with
  ///   [`NotOpaque`](PngError::NotOpaque).
  /// * Critical chunk types fail with
  ///   [`UnknownCriticalChunk`](PngError::UnknownCriticalChunk).
  #[inline]
  fn try_from(x: GenericChunk) -> Result<Self, Self::Error> {
    let chunk_type = x.chunk_type();
    if is_known_chunk_type(chunk_type) {
      return Err(PngError::NotOpaque { chunk_type });
    }
    if chunk_type.is_critical() {
      return Err(PngError::UnknownCriticalChunk { chunk_type });
    }
    Ok(Self::Generic(x))
  }
}

type DecodeFn = fn(&[u8]) -> PngResult<PngChunk>;

/// One entry of the chunk decoder table.
struct ChunkCodec {
  chunk_type: ChunkType,
  decode: DecodeFn,
}

fn decode_as<T: ChunkPayload + Into<PngChunk>>(data: &[u8]) -> PngResult<PngChunk> {
  T::decode_payload(data).map(Into::into)
}

/// Every chunk type with a typed decoder.
const REGISTRY: &[ChunkCodec] = &[
  ChunkCodec { chunk_type: IHDR::CHUNK_TYPE, decode: decode_as::<IHDR> },
  ChunkCodec { chunk_type: PLTE::CHUNK_TYPE, decode: decode_as::<PLTE> },
  ChunkCodec { chunk_type: IDAT::CHUNK_TYPE, decode: decode_as::<IDAT> },
  ChunkCodec { chunk_type: IEND::CHUNK_TYPE, decode: decode_as::<IEND> },
  ChunkCodec { chunk_type: tEXt::CHUNK_TYPE, decode: decode_as::<tEXt> },
  ChunkCodec { chunk_type: tIME::CHUNK_TYPE, decode: decode_as::<tIME> },
  ChunkCodec { chunk_type: cHRM::CHUNK_TYPE, decode: decode_as::<cHRM> },
  ChunkCodec { chunk_type: gAMA::CHUNK_TYPE, decode: decode_as::<gAMA> },
];

/// If this crate has a typed decoder for `chunk_type`.
#[inline]
#[must_use]
pub fn is_known_chunk_type(chunk_type: ChunkType) -> bool {
  REGISTRY.iter().any(|codec| codec.chunk_type == chunk_type)
}

impl TryFrom<RawChunk<'_>> for PngChunk {
  type Error = PngError;
  /// Upgrades a raw chunk into its typed form.
  ///
  /// * Known chunk types are decoded, and their decode errors are returned.
  /// * Unknown critical chunk types fail with
  ///   [`UnknownCriticalChunk`](PngError::UnknownCriticalChunk).
  /// * Unknown ancillary chunk types become [`PngChunk::Generic`].
  fn try_from(raw: RawChunk<'_>) -> Result<Self, Self::Error> {
    let chunk_type = raw.chunk_type();
    if let Some(codec) = REGISTRY.iter().find(|codec| codec.chunk_type == chunk_type) {
      return (codec.decode)(raw.data());
    }
    if chunk_type.is_critical() {
      return Err(PngError::UnknownCriticalChunk { chunk_type });
    }
    debug!(%chunk_type, len = raw.data().len(), "keeping unknown ancillary chunk as-is");
    Ok(Self::Generic(raw.to_generic()))
  }
}
