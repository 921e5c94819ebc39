//! Running sum of attention maps.

use super::saliency_map::SaliencyMap;
use crate::attention::{rescale_to_u8, AttentionMap};

/// Elementwise running sum over every attention map of one computation.
///
/// The sum only grows: [`add`](Self::add) and [`merge`](Self::merge) are the
/// only mutators, so the result does not depend on the order maps arrive in
/// (up to floating-point rounding).
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyAccumulator {
    sum: Vec<f64>,
    width: usize,
    height: usize,
    count: usize,
}

impl SaliencyAccumulator {
    /// A zero grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            sum: vec![0.0; width * height],
            width,
            height,
            count: 0,
        }
    }

    /// Add one attention map.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the map has the accumulator's dimensions.
    pub fn add(&mut self, map: &AttentionMap) {
        debug_assert_eq!((map.width(), map.height()), (self.width, self.height));
        for (acc, &v) in self.sum.iter_mut().zip(map.values()) {
            *acc += v;
        }
        self.count += 1;
    }

    /// Fold another partial sum of the same computation into this one.
    pub fn merge(mut self, other: SaliencyAccumulator) -> Self {
        debug_assert_eq!((other.width, other.height), (self.width, self.height));
        for (acc, v) in self.sum.iter_mut().zip(other.sum) {
            *acc += v;
        }
        self.count += other.count;
        self
    }

    /// Number of attention maps added so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The raw running sum.
    #[inline]
    pub fn sum(&self) -> &[f64] {
        &self.sum
    }

    /// Min-max rescale the sum to 0..=255. A perfectly uniform sum yields a
    /// uniform all-zero map.
    pub fn finish(&self) -> SaliencyMap {
        SaliencyMap::new(rescale_to_u8(&self.sum), self.width, self.height)
    }
}
