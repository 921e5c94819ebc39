//! 8-bit sRGB pixel type
//!
//! Source images arrive as gamma-encoded 8-bit triples. Keeping the code
//! values exact lets the gamma decode go through a 256-entry table.

use super::linear_rgb::LinearRgb;
use super::lut::srgb_u8_to_linear;

/// A gamma-encoded sRGB pixel with 8-bit code values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red code value (0..=255)
    pub r: u8,
    /// Green code value (0..=255)
    pub g: u8,
    /// Blue code value (0..=255)
    pub b: u8,
}

impl Srgb {
    /// Create an Srgb pixel from 8-bit code values.
    ///
    /// # Example
    /// ```
    /// use bms_core::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode through the lookup table.
    fn from(srgb: Srgb) -> Self {
        LinearRgb::new(
            srgb_u8_to_linear(srgb.r),
            srgb_u8_to_linear(srgb.g),
            srgb_u8_to_linear(srgb.b),
        )
    }
}
