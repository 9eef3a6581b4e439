/// Computes the CRC-32 of a chunk: the chunk type bytes, then the data.
///
/// The hash is updated over the two parts in turn, so they don't need to be in
/// one buffer.
#[inline]
#[must_use]
pub fn png_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
  let mut hasher = crc32fast::Hasher::new();
  hasher.update(chunk_type);
  hasher.update(data);
  hasher.finalize()
}

#[cfg(test)]
mod tests {
  use super::*;

  // The table-driven CRC from the PNG spec's sample code.
  const CRC_TABLE: [u32; 256] = {
    let mut out = [0; 256];
    let mut n = 0;
    while n < 256 {
      let mut c = n as u32;
      let mut k = 0;
      while k < 8 {
        if (c & 1) != 0 {
          c = 0xEDB8_8320_u32 ^ (c >> 1);
        } else {
          c >>= 1;
        }
        //
        k += 1;
      }
      out[n] = c;
      //
      n += 1;
    }
    out
  };

  fn reference_crc(iter: impl Iterator<Item = u8>) -> u32 {
    let mut crc = u32::MAX;
    for byte in iter {
      crc = CRC_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc ^ u32::MAX
  }

  #[test]
  fn test_known_values() {
    assert_eq!(png_crc(b"IEND", &[]), 0xAE42_6082);
    assert_eq!(png_crc(b"tEXt", &[]), 0x9642_C585);
    assert_eq!(png_crc(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0]), 0x376E_F924);
  }

  #[test]
  fn test_matches_reference_table() {
    let data: [u8; 9] = [0, 1, 2, 0x7F, 0x80, 0xFE, 0xFF, b'a', b'Z'];
    for len in 0..=data.len() {
      let expected = reference_crc(b"gAMA".iter().copied().chain(data[..len].iter().copied()));
      assert_eq!(png_crc(b"gAMA", &data[..len]), expected, "len {len}");
    }
  }

  #[test]
  fn test_order_sensitive() {
    assert_ne!(png_crc(b"IDAT", &[1, 2]), png_crc(b"IDAT", &[2, 1]));
  }
}
