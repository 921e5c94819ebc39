//! Immutable source image.

use crate::api::InputError;
use crate::color::Srgb;

/// A non-empty three-channel 8-bit color image, row-major.
///
/// Dimensions are fixed at construction and shared by every grid derived
/// from the image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: Vec<Srgb>,
    width: usize,
    height: usize,
}

impl SourceImage {
    /// Build an image from interleaved 8-bit samples.
    ///
    /// # Errors
    ///
    /// - [`InputError::Empty`] if either dimension is zero
    /// - [`InputError::ChannelCount`] if `channels != 3`
    /// - [`InputError::BufferLength`] if `data.len() != width * height * 3`
    ///
    /// # Example
    ///
    /// ```
    /// use bms_core::SourceImage;
    ///
    /// let data = vec![10u8; 2 * 2 * 3];
    /// let image = SourceImage::from_interleaved(&data, 2, 2, 3).unwrap();
    /// assert_eq!(image.width(), 2);
    ///
    /// assert!(SourceImage::from_interleaved(&[0u8; 16], 2, 2, 4).is_err());
    /// ```
    pub fn from_interleaved(
        data: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::Empty { width, height });
        }
        if channels != 3 {
            return Err(InputError::ChannelCount(channels));
        }
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(InputError::BufferLength {
                expected,
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(3)
            .map(|px| Srgb::from_u8(px[0], px[1], px[2]))
            .collect();

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build an image from already decoded pixels.
    pub fn from_pixels(pixels: Vec<Srgb>, width: usize, height: usize) -> Result<Self, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::Empty { width, height });
        }
        if pixels.len() != width * height {
            return Err(InputError::BufferLength {
                expected: width * height * 3,
                actual: pixels.len() * 3,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Srgb] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        let err = SourceImage::from_interleaved(&[], 0, 5, 3).unwrap_err();
        assert_eq!(err, InputError::Empty { width: 0, height: 5 });

        let err = SourceImage::from_pixels(Vec::new(), 3, 0).unwrap_err();
        assert_eq!(err, InputError::Empty { width: 3, height: 0 });
    }

    #[test]
    fn test_rejects_wrong_channel_count() {
        let err = SourceImage::from_interleaved(&[0u8; 4], 2, 2, 1).unwrap_err();
        assert_eq!(err, InputError::ChannelCount(1));

        let err = SourceImage::from_interleaved(&[0u8; 16], 2, 2, 4).unwrap_err();
        assert_eq!(err, InputError::ChannelCount(4));
    }

    #[test]
    fn test_rejects_short_buffer() {
        let err = SourceImage::from_interleaved(&[0u8; 11], 2, 2, 3).unwrap_err();
        assert_eq!(
            err,
            InputError::BufferLength {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_interleaved_layout_is_row_major() {
        let data = [1, 2, 3, 4, 5, 6];
        let image = SourceImage::from_interleaved(&data, 2, 1, 3).unwrap();
        assert_eq!(
            image.pixels(),
            &[Srgb::from_u8(1, 2, 3), Srgb::from_u8(4, 5, 6)]
        );
    }
}
