//! Color values that appear inside chunk data.
//!
//! Only the palette chunk stores colors directly, as tightly packed 8-bit RGB
//! triples, so that's the only format needed here.

use bytemuck::{Pod, Zeroable};

/// An RGB value, 8-bits per channel.
///
/// This has an alignment of 1 and no padding, so a `PLTE` payload can be
/// viewed as `&[RGB8]` directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct RGB8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl RGB8 {
  /// Makes a color from its channels.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}
impl From<[u8; 3]> for RGB8 {
  #[inline]
  #[must_use]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}
impl From<RGB8> for [u8; 3] {
  #[inline]
  #[must_use]
  fn from(RGB8 { r, g, b }: RGB8) -> Self {
    [r, g, b]
  }
}
