//! Binary mask over the image grid.

use crate::channel::ChannelMap;

/// A binary mask, one `bool` per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanMap {
    bits: Vec<bool>,
    width: usize,
    height: usize,
}

impl BooleanMap {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `bits.len() == width * height`.
    pub fn new(bits: Vec<bool>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            bits.len(),
            width * height,
            "bits length ({}) must match width * height ({}x{})",
            bits.len(),
            width,
            height,
        );
        Self {
            bits,
            width,
            height,
        }
    }

    /// A mask with every pixel set to `value`.
    pub fn filled(value: bool, width: usize, height: usize) -> Self {
        Self::new(vec![value; width * height], width, height)
    }

    /// Pixels strictly greater than `threshold`.
    pub fn above(channel: &ChannelMap, threshold: f64) -> Self {
        Self::from_channel(channel, |v| v > threshold)
    }

    /// Pixels less than or equal to `threshold`.
    pub fn at_most(channel: &ChannelMap, threshold: f64) -> Self {
        Self::from_channel(channel, |v| v <= threshold)
    }

    fn from_channel(channel: &ChannelMap, predicate: impl Fn(f64) -> bool) -> Self {
        let bits = channel
            .values()
            .iter()
            .map(|&v| predicate(v as f64))
            .collect();
        Self::new(bits, channel.width(), channel.height())
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
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Value at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    /// Number of set pixels.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Pixelwise complement.
    pub fn inverted(&self) -> Self {
        Self::new(
            self.bits.iter().map(|&b| !b).collect(),
            self.width,
            self.height,
        )
    }

    /// 0 / 255 bytes, for display.
    pub fn to_u8(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| if b { 255 } else { 0 }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;

    fn channel(values: &[f32], width: usize) -> ChannelMap {
        ChannelMap::new(
            Channel::Lightness,
            values.to_vec(),
            width,
            values.len() / width,
        )
    }

    #[test]
    fn test_above_is_strict() {
        let map = BooleanMap::above(&channel(&[10.0, 20.0, 30.0, 20.0], 2), 20.0);
        assert_eq!(map.bits(), &[false, false, true, false]);
    }

    #[test]
    fn test_at_most_includes_threshold() {
        let map = BooleanMap::at_most(&channel(&[10.0, 20.0, 30.0, 20.0], 2), 20.0);
        assert_eq!(map.bits(), &[true, true, false, true]);
    }

    #[test]
    fn test_pair_partitions_pixels() {
        let ch = channel(&[0.0, 5.0, 9.0, 12.0, 99.0, 100.0], 3);
        for t in [0.0, 5.0, 50.0, 99.5] {
            let above = BooleanMap::above(&ch, t);
            let at_most = BooleanMap::at_most(&ch, t);
            assert_eq!(above.inverted(), at_most, "threshold {t}");
            assert_eq!(above.count_ones() + at_most.count_ones(), 6);
        }
    }

    #[test]
    fn test_get_and_to_u8() {
        let map = BooleanMap::new(vec![true, false, false, true], 2, 2);
        assert!(map.get(0, 0));
        assert!(!map.get(1, 0));
        assert!(map.get(1, 1));
        assert_eq!(map.to_u8(), vec![255, 0, 0, 255]);
        assert_eq!(BooleanMap::filled(true, 3, 1).count_ones(), 3);
    }
}
