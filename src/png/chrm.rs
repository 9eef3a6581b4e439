use super::*;

/// The exact byte layout of `cHRM` data.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct ChrmLayout {
  white_x: U32BE,
  white_y: U32BE,
  red_x: U32BE,
  red_y: U32BE,
  green_x: U32BE,
  green_y: U32BE,
  blue_x: U32BE,
  blue_y: U32BE,
}

/// A CIE 1931 `(x, y)` chromaticity, held in fixed-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChromaPoint {
  x: u32,
  y: u32,
}
impl ChromaPoint {
  /// ## Failure
  /// * Either coordinate is non-finite or doesn't fit the fixed-point range.
  pub fn new(x: f64, y: f64) -> PngResult<Self> {
    Ok(Self {
      x: to_fixed_point(x, ChunkType::cHRM, "x")?,
      y: to_fixed_point(y, ChunkType::cHRM, "y")?,
    })
  }
  #[inline]
  #[must_use]
  pub fn x(&self) -> f64 {
    from_fixed_point(self.x)
  }
  #[inline]
  #[must_use]
  pub fn y(&self) -> f64 {
    from_fixed_point(self.y)
  }
}

/// Primary chromaticities and white point
///
/// Spec: [cHRM](https://www.w3.org/TR/png/#11cHRM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct cHRM {
  pub white: ChromaPoint,
  pub red: ChromaPoint,
  pub green: ChromaPoint,
  pub blue: ChromaPoint,
}
impl cHRM {
  #[inline]
  #[must_use]
  pub const fn new(
    white: ChromaPoint, red: ChromaPoint, green: ChromaPoint, blue: ChromaPoint,
  ) -> Self {
    Self { white, red, green, blue }
  }

  #[inline]
  fn to_layout(self) -> ChrmLayout {
    ChrmLayout {
      white_x: U32BE::from_u32(self.white.x),
      white_y: U32BE::from_u32(self.white.y),
      red_x: U32BE::from_u32(self.red.x),
      red_y: U32BE::from_u32(self.red.y),
      green_x: U32BE::from_u32(self.green.x),
      green_y: U32BE::from_u32(self.green.y),
      blue_x: U32BE::from_u32(self.blue.x),
      blue_y: U32BE::from_u32(self.blue.y),
    }
  }
}
impl ChunkPayload for cHRM {
  const CHUNK_TYPE: ChunkType = ChunkType::cHRM;

  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    let l: ChrmLayout = bytemuck::try_pod_read_unaligned(data).map_err(|_| {
      PngError::ChunkLength {
        chunk_type: Self::CHUNK_TYPE,
        expected: size_of::<ChrmLayout>(),
        actual: data.len(),
      }
    })?;
    let point = |x: U32BE, y: U32BE| ChromaPoint { x: x.to_u32(), y: y.to_u32() };
    Ok(Self {
      white: point(l.white_x, l.white_y),
      red: point(l.red_x, l.red_y),
      green: point(l.green_x, l.green_y),
      blue: point(l.blue_x, l.blue_y),
    })
  }

  #[inline]
  fn payload_len(&self) -> usize {
    size_of::<ChrmLayout>()
  }

  #[inline]
  fn write_payload(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::bytes_of(&self.to_layout()));
  }
}
