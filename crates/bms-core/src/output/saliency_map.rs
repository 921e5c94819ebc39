//! Final 8-bit saliency map.

/// Single-channel 8-bit saliency, row-major, same dimensions as the source.
///
/// # Example
///
/// ```
/// use bms_core::SaliencyMap;
///
/// let map = SaliencyMap::new(vec![0, 128, 255, 64], 2, 2);
/// assert_eq!(map.get(1, 1), 64);
/// assert_eq!(map.pixels().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaliencyMap {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl SaliencyMap {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixels length ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
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
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }
}
