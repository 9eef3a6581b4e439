use super::*;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue (Truecolour)
  RGB = 2,
  /// Index into a palette.
  ///
  /// The palette will have RGB8 data.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha (Truecolour with alpha)
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }

  /// The bit depths that an image of this color type may use.
  #[inline]
  #[must_use]
  pub const fn allowed_bit_depths(self) -> &'static [u8] {
    match self {
      Self::Y => &[1, 2, 4, 8, 16],
      Self::RGB => &[8, 16],
      Self::Index => &[1, 2, 4, 8],
      Self::YA => &[8, 16],
      Self::RGBA => &[8, 16],
    }
  }

  /// If `bit_depth` is legal for this color type.
  #[inline]
  #[must_use]
  pub fn is_allowed_bit_depth(self, bit_depth: u8) -> bool {
    self.allowed_bit_depths().contains(&bit_depth)
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(PngError::InvalidColorType { chunk_type: ChunkType::IHDR, value }),
    })
  }
}
impl From<PngColorType> for u8 {
  #[inline]
  #[must_use]
  fn from(color_type: PngColorType) -> Self {
    color_type as u8
  }
}

/// The exact byte layout of `IHDR` data.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct IhdrLayout {
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}

/// Image Header
///
/// Spec: [IHDR](https://www.w3.org/TR/png/#11IHDR)
///
/// The only compression method and the only filter method PNG defines are
/// both `0`, so those aren't stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  width: u32,
  height: u32,
  bit_depth: u8,
  color_type: PngColorType,
  is_interlaced: bool,
}
impl IHDR {
  /// Makes a header, checking every field.
  ///
  /// ## Failure
  /// * `width` or `height` is 0.
  /// * `bit_depth` isn't allowed for the `color_type`.
  /// * `compression_method` or `filter_method` isn't 0.
  /// * `interlace_method` isn't 0 (none) or 1 (Adam7).
  pub fn new(
    width: u32, height: u32, bit_depth: u8, color_type: PngColorType, compression_method: u8,
    filter_method: u8, interlace_method: u8,
  ) -> PngResult<Self> {
    let out_of_range = |field: &'static str, value: u32| PngError::OutOfRange {
      chunk_type: ChunkType::IHDR,
      field,
      value: i64::from(value),
    };
    if width == 0 {
      return Err(out_of_range("width", width));
    }
    if height == 0 {
      return Err(out_of_range("height", height));
    }
    if !color_type.is_allowed_bit_depth(bit_depth) {
      return Err(PngError::InvalidBitDepth { color_type, bit_depth });
    }
    if compression_method != 0 {
      return Err(out_of_range("compression_method", compression_method.into()));
    }
    if filter_method != 0 {
      return Err(out_of_range("filter_method", filter_method.into()));
    }
    let is_interlaced = match interlace_method {
      0 => false,
      1 => true,
      other => return Err(out_of_range("interlace_method", other.into())),
    };
    Ok(Self { width, height, bit_depth, color_type, is_interlaced })
  }

  /// width in pixels
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }
  /// height in pixels
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }
  /// bits per channel
  #[inline]
  #[must_use]
  pub const fn bit_depth(&self) -> u8 {
    self.bit_depth
  }
  /// pixel color type
  #[inline]
  #[must_use]
  pub const fn color_type(&self) -> PngColorType {
    self.color_type
  }
  /// Always 0 (zlib deflate).
  #[inline]
  #[must_use]
  pub const fn compression_method(&self) -> u8 {
    0
  }
  /// Always 0 (adaptive filtering with five basic filter types).
  #[inline]
  #[must_use]
  pub const fn filter_method(&self) -> u8 {
    0
  }
  /// 0 for no interlace, 1 for Adam7.
  #[inline]
  #[must_use]
  pub const fn interlace_method(&self) -> u8 {
    self.is_interlaced as u8
  }
  /// if the image data is stored interlaced.
  ///
  /// please don't make new interlaced images, they're terrible.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.is_interlaced
  }
  /// Bits used by each pixel of the (decompressed, unfiltered) image.
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> usize {
    (self.bit_depth as usize) * self.color_type.channel_count()
  }

  #[inline]
  fn to_layout(self) -> IhdrLayout {
    IhdrLayout {
      width: U32BE::from_u32(self.width),
      height: U32BE::from_u32(self.height),
      bit_depth: self.bit_depth,
      color_type: self.color_type.into(),
      compression_method: self.compression_method(),
      filter_method: self.filter_method(),
      interlace_method: self.interlace_method(),
    }
  }
}
impl ChunkPayload for IHDR {
  const CHUNK_TYPE: ChunkType = ChunkType::IHDR;

  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    let layout: IhdrLayout = bytemuck::try_pod_read_unaligned(data).map_err(|_| {
      PngError::ChunkLength {
        chunk_type: Self::CHUNK_TYPE,
        expected: size_of::<IhdrLayout>(),
        actual: data.len(),
      }
    })?;
    Self::new(
      layout.width.to_u32(),
      layout.height.to_u32(),
      layout.bit_depth,
      PngColorType::try_from(layout.color_type)?,
      layout.compression_method,
      layout.filter_method,
      layout.interlace_method,
    )
  }

  #[inline]
  fn payload_len(&self) -> usize {
    size_of::<IhdrLayout>()
  }

  #[inline]
  fn write_payload(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::bytes_of(&self.to_layout()));
  }
}
