use super::*;

/// The longest keyword a text chunk may have, in characters.
pub const MAX_KEYWORD_LEN: usize = 79;

/// Checks that `s` has no NUL and only Latin-1 characters.
fn check_latin1(s: &str, field: &'static str) -> PngResult<()> {
  for ch in s.chars() {
    if ch == '\0' {
      return Err(PngError::NulInText { chunk_type: ChunkType::tEXt, field });
    }
    if u32::from(ch) > 0xFF {
      return Err(PngError::NotLatin1 { chunk_type: ChunkType::tEXt, field, ch });
    }
  }
  Ok(())
}

/// Each Latin-1 byte is the code point of the same value.
#[inline]
fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| char::from(b)).collect()
}

/// Textual data
///
/// Spec: [tEXt](https://www.w3.org/TR/png/#11tEXt)
///
/// A keyword (1 to 79 characters) and a text string, both Latin-1 encoded,
/// stored with a single NUL byte between them.
///
/// [`tEXt::new`] refuses a NUL in either field. Decoding is looser: the data is
/// split at the *first* NUL, and any later NUL bytes are kept as part of the
/// text string. Data with no NUL at all is all keyword and an empty text, and
/// is written back out without a NUL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct tEXt {
  keyword: String,
  text: String,
  /// `false` only for decoded data that had no NUL.
  has_separator: bool,
}
impl tEXt {
  /// Makes a text chunk.
  ///
  /// ## Failure
  /// * Either field contains a NUL or a character above `U+00FF`.
  /// * The keyword is empty or longer than [`MAX_KEYWORD_LEN`] characters.
  pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> PngResult<Self> {
    let keyword = keyword.into();
    let text = text.into();
    check_latin1(&keyword, "keyword")?;
    let len = keyword.chars().count();
    if !(1..=MAX_KEYWORD_LEN).contains(&len) {
      return Err(PngError::KeywordLength { chunk_type: Self::CHUNK_TYPE, len });
    }
    check_latin1(&text, "text")?;
    Ok(Self { keyword, text, has_separator: true })
  }

  #[inline]
  #[must_use]
  pub fn keyword(&self) -> &str {
    &self.keyword
  }

  #[inline]
  #[must_use]
  pub fn text(&self) -> &str {
    &self.text
  }

  /// If the encoded form has a NUL after the keyword.
  ///
  /// Always `true` unless this was decoded from data without one.
  #[inline]
  #[must_use]
  pub const fn has_separator(&self) -> bool {
    self.has_separator
  }
}
impl ChunkPayload for tEXt {
  const CHUNK_TYPE: ChunkType = ChunkType::tEXt;

  fn decode_payload(data: &[u8]) -> PngResult<Self> {
    let (keyword, text, has_separator) = match data.iter().position(|&b| b == 0) {
      Some(i) => (&data[..i], &data[i + 1..], true),
      None => (data, &[][..], false),
    };
    if !(1..=MAX_KEYWORD_LEN).contains(&keyword.len()) {
      return Err(PngError::KeywordLength { chunk_type: Self::CHUNK_TYPE, len: keyword.len() });
    }
    Ok(Self {
      keyword: latin1_to_string(keyword),
      text: latin1_to_string(text),
      has_separator,
    })
  }

  #[inline]
  fn payload_len(&self) -> usize {
    // every char is one byte once encoded
    self.keyword.chars().count() + usize::from(self.has_separator) + self.text.chars().count()
  }

  fn write_payload(&self, out: &mut Vec<u8>) {
    // chars were limited to Latin-1 on the way in, so `as u8` is lossless.
    out.extend(self.keyword.chars().map(|ch| ch as u8));
    if self.has_separator {
      out.push(0);
    }
    out.extend(self.text.chars().map(|ch| ch as u8));
  }
}
