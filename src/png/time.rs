use super::*;

/// The exact byte layout of `tIME` data.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct TimeLayout {
  year: U16BE,
  month: u8,
  day: u8,
  hour: u8,
  minute: u8,
  second: u8,
}

/// Image last-modification time
///
/// Spec: [tIME](https://www.w3.org/TR/png/#11tIME)
///
/// The time is in UTC. A second of 60 is allowed for leap seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct tIME {
  year: u16,
  month: u8,
  day: u8,
  hour: u8,
  minute: u8,
  second: u8,
}
impl tIME {
  /// Makes a timestamp, checking that each field is in its range.
  ///
  /// month `1..=12`, day `1..=31`, hour `0..=23`, minute `0..=59`, second
  /// `0..=60`. Any `u16` year is fine.
  pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> PngResult<Self> {
    for (field, value, range) in [
      ("month", month, 1..=12),
      ("day", day, 1..=31),
      ("hour", hour, 0..=23),
      ("minute", minute, 0..=59),
      ("second", second, 0..=60),
    ] {
      if !range.contains(&value) {
        return Err(PngError::OutOfRange {
          chunk_type: Self::CHUNK_TYPE,
          field,
          value: i64::from(value),
        });
      }
    }
    Ok(Self { year, month, day, hour, minute, second })
  }

  #[inline]
  #[must_use]
  pub const fn year(&self) -> u16 {
    self.year
  }
  #[inline]
  #[must_use]
  pub const fn month(&self) -> u8 {
    self.month
  }
  #[inline]
  #[must_use]
  pub const fn day(&self) -> u8 {
    self.day
  }
  #[inline]
  #[must_use]
  pub const fn hour(&self) -> u8 {
    self.hour
  }
  #[inline]
  #[must_use]
  pub const fn minute(&self) -> u8 {
    self.minute
  }
  #[inline]
  #[must_use]
  pub const fn second(&self) -> u8 {
    self.second
  }
}
impl ChunkPayload for tIME {
  const CHUNK_TYPE: ChunkType = ChunkType::tIME;

  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    let layout: TimeLayout = bytemuck::try_pod_read_unaligned(data).map_err(|_| {
      PngError::ChunkLength {
        chunk_type: Self::CHUNK_TYPE,
        expected: size_of::<TimeLayout>(),
        actual: data.len(),
      }
    })?;
    Self::new(
      layout.year.to_u16(),
      layout.month,
      layout.day,
      layout.hour,
      layout.minute,
      layout.second,
    )
  }

  #[inline]
  fn payload_len(&self) -> usize {
    size_of::<TimeLayout>()
  }

  #[inline]
  fn write_payload(&self, out: &mut Vec<u8>) {
    let layout = TimeLayout {
      year: U16BE::from_u16(self.year),
      month: self.month,
      day: self.day,
      hour: self.hour,
      minute: self.minute,
      second: self.second,
    };
    out.extend_from_slice(bytemuck::bytes_of(&layout));
  }
}
