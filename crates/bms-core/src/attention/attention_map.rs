//! Normalized floating-point attention map.

use crate::mask::BooleanMap;

/// Below this an L2 norm or min-max range counts as zero.
const DEGENERATE_EPSILON: f64 = f64::EPSILON;

/// How a foreground mask is turned into an attention map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide by the L2 norm so the squared values sum to 1
    #[default]
    L2,
    /// Rescale linearly so the minimum maps to 0 and the maximum to 1
    MinMax,
}

/// Normalized attention values, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct AttentionMap {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl AttentionMap {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `values.len() == width * height`.
    pub fn new(values: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            values,
            width,
            height,
        }
    }

    /// Foreground pixels become 1.0, the rest 0.0, then `normalization` is
    /// applied. A zero norm or zero range produces an all-zero map.
    ///
    /// # Example
    ///
    /// ```
    /// use bms_core::{AttentionMap, BooleanMap, Normalization};
    ///
    /// let mask = BooleanMap::new(vec![true, true, true, true], 2, 2);
    /// let map = AttentionMap::from_mask(&mask, Normalization::L2);
    /// assert_eq!(map.values(), &[0.5, 0.5, 0.5, 0.5]);
    /// ```
    pub fn from_mask(mask: &BooleanMap, normalization: Normalization) -> Self {
        let raw = mask
            .bits()
            .iter()
            .map(|&b| if b { 1.0 } else { 0.0 })
            .collect();
        let mut map = Self::new(raw, mask.width(), mask.height());
        match normalization {
            Normalization::L2 => map.normalize_l2(),
            Normalization::MinMax => map.normalize_min_max(),
        }
        map
    }

    fn normalize_l2(&mut self) {
        let norm = self.values.iter().map(|v| v * v).sum::<f64>().sqrt();
        let scale = if norm > DEGENERATE_EPSILON { 1.0 / norm } else { 0.0 };
        self.values.iter_mut().for_each(|v| *v *= scale);
    }

    fn normalize_min_max(&mut self) {
        let (min, max) = self.min_max();
        let range = max - min;
        let scale = if range > DEGENERATE_EPSILON { 1.0 / range } else { 0.0 };
        self.values.iter_mut().for_each(|v| *v = (*v - min) * scale);
    }

    fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest value; 0.0 for an empty map.
    pub fn maximum(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Min-max rescaled to 0..=255 bytes for display. The true scale is lost;
    /// keep [`maximum`](Self::maximum) to undo it.
    pub fn to_display_u8(&self) -> Vec<u8> {
        rescale_to_u8(&self.values)
    }
}

/// Min-max rescale to 0..=255, rounding to nearest. A uniform input maps to
/// all zeros.
pub(crate) fn rescale_to_u8(values: &[f64]) -> Vec<u8> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    let scale = if range > DEGENERATE_EPSILON {
        255.0 / range
    } else {
        0.0
    };
    values
        .iter()
        .map(|&v| ((v - min) * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}
