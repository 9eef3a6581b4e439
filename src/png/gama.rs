use super::*;

/// Scale between a real value and its stored fixed-point integer.
pub const FIXED_POINT_SCALE: f64 = 100_000.0;

/// Quantizes `value` to the nearest `1 / 100_000`, as stored on the wire.
///
/// ## Failure
/// * `value` is NaN or infinite.
/// * The scaled value doesn't fit in a `u32` (it's negative or too big).
pub(crate) fn to_fixed_point(
  value: f64, chunk_type: ChunkType, field: &'static str,
) -> PngResult<u32> {
  if !value.is_finite() {
    return Err(PngError::NonFinite { chunk_type, field });
  }
  let scaled = (value * FIXED_POINT_SCALE).round();
  if !(0.0..=f64::from(u32::MAX)).contains(&scaled) {
    // saturating cast, only for the error report
    return Err(PngError::OutOfRange { chunk_type, field, value: scaled as i64 });
  }
  Ok(scaled as u32)
}

#[inline]
#[must_use]
pub(crate) fn from_fixed_point(fixed: u32) -> f64 {
  f64::from(fixed) / FIXED_POINT_SCALE
}

/// Image gamma
///
/// Spec: [gAMA](https://www.w3.org/TR/png/#11gAMA)
///
/// Stored as a fixed-point value, so only 5 decimal places survive encoding.
/// The value held here is already quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct gAMA {
  gamma: u32,
}
impl gAMA {
  /// ## Failure
  /// * `gamma` is non-finite, negative, or above `u32::MAX / 100_000`.
  #[inline]
  pub fn new(gamma: f64) -> PngResult<Self> {
    Ok(Self { gamma: to_fixed_point(gamma, Self::CHUNK_TYPE, "gamma")? })
  }

  #[inline]
  #[must_use]
  pub fn gamma(&self) -> f64 {
    from_fixed_point(self.gamma)
  }

  /// The raw fixed-point value.
  #[inline]
  #[must_use]
  pub const fn gamma_fixed(&self) -> u32 {
    self.gamma
  }
}
impl ChunkPayload for gAMA {
  const CHUNK_TYPE: ChunkType = ChunkType::gAMA;

  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    let gamma: U32BE = bytemuck::try_pod_read_unaligned(data).map_err(|_| {
      PngError::ChunkLength {
        chunk_type: Self::CHUNK_TYPE,
        expected: size_of::<U32BE>(),
        actual: data.len(),
      }
    })?;
    Ok(Self { gamma: gamma.to_u32() })
  }

  #[inline]
  fn payload_len(&self) -> usize {
    size_of::<U32BE>()
  }

  #[inline]
  fn write_payload(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::bytes_of(&U32BE::from_u32(self.gamma)));
  }
}
