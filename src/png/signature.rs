use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// The PNG signature, as a marker value.
///
/// There's only one legal signature, so this holds no data. It exists so that
/// a [`Datastream`] can show that its signature was checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngSignature;
impl PngSignature {
  /// The number of bytes the signature occupies.
  pub const LEN: usize = PNG_SIGNATURE.len();

  /// Checks that `bytes` is exactly the PNG signature.
  #[inline]
  pub fn verify(bytes: &[u8]) -> PngResult<Self> {
    if bytes == PNG_SIGNATURE {
      Ok(Self)
    } else {
      Err(PngError::BadSignature)
    }
  }

  /// Checks the signature at the front of `bytes`, returning what follows it.
  #[inline]
  pub fn strip(bytes: &[u8]) -> PngResult<(Self, &[u8])> {
    match bytes.split_first_chunk::<8>() {
      Some((head, rest)) => Self::verify(head).map(|sig| (sig, rest)),
      None => Err(PngError::BadSignature),
    }
  }

  /// The signature bytes.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 8] {
    PNG_SIGNATURE
  }
}
