//! Just has shorthands for the byte pulling that chunk parsing does.

use crate::PngError;

/// Splits `N` bytes off the front of `bytes`.
///
/// `offset` is only used to describe where the read happened if it fails.
#[inline]
pub(crate) fn try_pull_byte_array<const N: usize>(
  bytes: &[u8], offset: usize,
) -> Result<([u8; N], &[u8]), PngError> {
  match bytes.split_first_chunk::<N>() {
    Some((head, tail)) => Ok((*head, tail)),
    None => Err(PngError::Truncated { offset, needed: N, available: bytes.len() }),
  }
}

#[inline]
pub(crate) fn try_pull_u32_be(bytes: &[u8], offset: usize) -> Result<(u32, &[u8]), PngError> {
  try_pull_byte_array::<4>(bytes, offset).map(|(a, tail)| (u32::from_be_bytes(a), tail))
}

#[test]
fn test_try_pull_byte_array() {
  let (a, rest) = try_pull_byte_array::<2>(&[1, 2, 3], 0).unwrap();
  assert_eq!(a, [1, 2]);
  assert_eq!(rest, &[3]);
  assert_eq!(
    try_pull_u32_be(&[1, 2, 3], 7),
    Err(PngError::Truncated { offset: 7, needed: 4, available: 3 })
  );
}
