//! Linear RGB color type
//!
//! Linear RGB is proportional to light intensity. The CIE XYZ matrix is only
//! valid on linear values, so every Lab conversion passes through here.

/// A color in linear RGB color space (sRGB primaries, D65 white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// CIE XYZ tristimulus values (Y of white = 1.0).
    #[inline]
    pub fn to_xyz(self) -> [f32; 3] {
        [
            0.412_453 * self.r + 0.357_580 * self.g + 0.180_423 * self.b,
            0.212_671 * self.r + 0.715_160 * self.g + 0.072_169 * self.b,
            0.019_334 * self.r + 0.119_193 * self.g + 0.950_227 * self.b,
        ]
    }
}
