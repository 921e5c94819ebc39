//! Morphological opening of boolean maps.

use super::boolean_map::BooleanMap;
use super::morphology::{dilate, erode, StructuringElement};

/// Denoises boolean maps by opening: `width` erosions followed by `width`
/// dilations. A width of 0 is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRefiner {
    width: u32,
    element: StructuringElement,
}

impl MapRefiner {
    pub fn new(width: u32, element: StructuringElement) -> Self {
        Self { width, element }
    }

    /// Open `mask`, returning a new map of the same dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use bms_core::{BooleanMap, MapRefiner, StructuringElement};
    ///
    /// let mask = BooleanMap::new(vec![false, true, false], 3, 1);
    /// let refiner = MapRefiner::new(0, StructuringElement::Square);
    /// assert_eq!(refiner.refine(&mask), mask);
    /// ```
    pub fn refine(&self, mask: &BooleanMap) -> BooleanMap {
        if self.width == 0 {
            return mask.clone();
        }
        let eroded = erode(mask, self.element, self.width);
        dilate(&eroded, self.element, self.width)
    }
}
