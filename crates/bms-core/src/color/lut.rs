//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs and holds one linear
//! value per 8-bit sRGB code, so source pixels decode without interpolation.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB code value to linear light (0.0..=1.0).
#[inline]
pub fn srgb_u8_to_linear(code: u8) -> f32 {
    SRGB_TO_LINEAR[code as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert!(srgb_u8_to_linear(0).abs() < 1e-6);
        assert!((srgb_u8_to_linear(255) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = srgb_u8_to_linear(0);
        for code in 1..=255u8 {
            let curr = srgb_u8_to_linear(code);
            assert!(curr > prev, "srgb_u8_to_linear not monotonic at {code}");
            prev = curr;
        }
    }

    #[test]
    fn test_linear_segment() {
        // Codes up to 10 sit on the linear toe of the curve (x / 12.92)
        let expected = (10.0 / 255.0) / 12.92;
        assert!((srgb_u8_to_linear(10) - expected).abs() < 1e-7);
    }
}
