//! CIE L*a*b* color space
//!
//! The saliency channels are the three Lab components. Lab is close to
//! perceptually uniform, so a fixed threshold step slices every channel
//! into visually comparable bands.
//!
//! # References
//!
//! CIE 15:2004, "Colorimetry", section 8.2.1 (CIE 1976 L*a*b*)

use super::linear_rgb::LinearRgb;

/// D65 reference white, X component (Y = 1.0).
const WHITE_X: f32 = 0.950_456;
/// D65 reference white, Z component (Y = 1.0).
const WHITE_Z: f32 = 1.088_754;

/// (6/29)^3: below this the cube root is replaced by a linear segment.
const EPSILON: f32 = 0.008_856;
const KAPPA_SLOPE: f32 = 7.787;
const KAPPA_OFFSET: f32 = 16.0 / 116.0;

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, roughly -128.0..=127.0
/// - `b`: Blue-yellow axis, roughly -128.0..=127.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Encode on the conventional 8-bit scale: `L * 255 / 100`, `a + 128`,
    /// `b + 128`, rounded and clamped to 0..=255.
    ///
    /// # Example
    ///
    /// ```
    /// use bms_core::{Lab, LinearRgb};
    ///
    /// let white = Lab::from(LinearRgb::new(1.0, 1.0, 1.0));
    /// assert_eq!(white.to_u8(), [255, 128, 128]);
    /// ```
    #[inline]
    pub fn to_u8(self) -> [u8; 3] {
        [
            encode(self.l * 255.0 / 100.0),
            encode(self.a + 128.0),
            encode(self.b + 128.0),
        ]
    }
}

#[inline]
fn encode(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + KAPPA_OFFSET
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = rgb.to_xyz();
        let fx = f(x / WHITE_X);
        let fy = f(y);
        let fz = f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Srgb;

    const TOLERANCE: f32 = 0.05;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_achromatic_extremes() {
        let white = Lab::from(LinearRgb::new(1.0, 1.0, 1.0));
        assert!(approx_eq(white.l, 100.0), "white L = {}", white.l);
        assert!(approx_eq(white.a, 0.0), "white a = {}", white.a);
        assert!(approx_eq(white.b, 0.0), "white b = {}", white.b);

        let black = Lab::from(LinearRgb::new(0.0, 0.0, 0.0));
        assert!(approx_eq(black.l, 0.0), "black L = {}", black.l);
        assert!(approx_eq(black.a, 0.0));
        assert!(approx_eq(black.b, 0.0));
    }

    /// Reference values for sRGB primaries (D65), rounded to one decimal.
    #[test]
    fn test_primaries_known_values() {
        let red = Lab::from(LinearRgb::from(Srgb::from_u8(255, 0, 0)));
        assert!((red.l - 53.24).abs() < 0.2, "red L = {}", red.l);
        assert!((red.a - 80.09).abs() < 0.3, "red a = {}", red.a);
        assert!((red.b - 67.20).abs() < 0.3, "red b = {}", red.b);

        let blue = Lab::from(LinearRgb::from(Srgb::from_u8(0, 0, 255)));
        assert!((blue.l - 32.30).abs() < 0.2, "blue L = {}", blue.l);
        assert!(blue.b < -100.0, "blue b = {}", blue.b);
    }

    #[test]
    fn test_grays_have_no_chroma() {
        for code in [1u8, 30, 64, 128, 200, 254] {
            let lab = Lab::from(LinearRgb::from(Srgb::from_u8(code, code, code)));
            assert!(lab.a.abs() < 0.1, "gray {code}: a = {}", lab.a);
            assert!(lab.b.abs() < 0.1, "gray {code}: b = {}", lab.b);
        }
    }

    #[test]
    fn test_lightness_monotonic_in_gray() {
        let mut prev = -1.0;
        for code in 0..=255u8 {
            let lab = Lab::from(LinearRgb::from(Srgb::from_u8(code, code, code)));
            assert!(lab.l > prev, "L not increasing at {code}");
            prev = lab.l;
        }
    }

    #[test]
    fn test_eight_bit_encoding() {
        assert_eq!(Lab::new(0.0, 0.0, 0.0).to_u8(), [0, 128, 128]);
        assert_eq!(Lab::new(100.0, -128.0, 127.0).to_u8(), [255, 0, 255]);
        // Out-of-range components clamp instead of wrapping
        assert_eq!(Lab::new(120.0, -200.0, 300.0).to_u8(), [255, 0, 255]);
    }
}
