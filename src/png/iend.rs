use super::*;

/// Image End
///
/// Spec: [IEND](https://www.w3.org/TR/png/#11IEND)
///
/// Always the last chunk, and always empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IEND;
impl ChunkPayload for IEND {
  const CHUNK_TYPE: ChunkType = ChunkType::IEND;

  #[inline]
  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    if data.is_empty() {
      Ok(IEND)
    } else {
      Err(PngError::ChunkLength { chunk_type: Self::CHUNK_TYPE, expected: 0, actual: data.len() })
    }
  }

  #[inline]
  fn payload_len(&self) -> usize {
    0
  }

  #[inline]
  fn write_payload(&self, _out: &mut Vec<u8>) {}
}

#[test]
fn test_iend_payload() {
  assert_eq!(IEND::decode_payload(&[]), Ok(IEND));
  assert_eq!(
    IEND::decode_payload(&[0]),
    Err(PngError::ChunkLength { chunk_type: ChunkType::IEND, expected: 0, actual: 1 })
  );
  assert!(IEND.to_payload().is_empty());
}
