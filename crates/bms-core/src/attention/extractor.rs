//! Attention extraction: border background removal, dilation and
//! normalization of one refined boolean map.

use rand::Rng;

use super::attention_map::{AttentionMap, Normalization};
use super::flood_fill::BackgroundFill;
use super::seeds::{border_seeds, jittered_border_seeds};
use crate::mask::{dilate, BooleanMap, StructuringElement};

/// Everything produced for one boolean map.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Pixels not connected to the border through same-valued pixels
    pub foreground: BooleanMap,
    /// `foreground` after dilation (equal to it when the width is 0)
    pub dilated: BooleanMap,
    /// Normalized attention values
    pub map: AttentionMap,
    /// Maximum of `map`, before any display rescaling
    pub maximum: f64,
}

/// Turns a boolean map into an attention map.
///
/// # Example
///
/// ```
/// use bms_core::{AttentionExtractor, BooleanMap, Normalization, StructuringElement};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// // 3x3 with only the center set: the border ring is background
/// let mut bits = vec![false; 9];
/// bits[4] = true;
/// let mask = BooleanMap::new(bits, 3, 3);
///
/// let extractor =
///     AttentionExtractor::new(false, 0, Normalization::MinMax, StructuringElement::Square);
/// let out = extractor.extract(&mask, &mut StdRng::seed_from_u64(0));
/// assert_eq!(out.foreground.count_ones(), 1);
/// assert_eq!(out.maximum, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttentionExtractor {
    handle_border: bool,
    dilation_width: u32,
    normalization: Normalization,
    element: StructuringElement,
}

impl AttentionExtractor {
    pub fn new(
        handle_border: bool,
        dilation_width: u32,
        normalization: Normalization,
        element: StructuringElement,
    ) -> Self {
        Self {
            handle_border,
            dilation_width,
            normalization,
            element,
        }
    }

    /// Run the extraction. `rng` is only drawn from when border handling is
    /// enabled.
    pub fn extract<R: Rng + ?Sized>(&self, mask: &BooleanMap, rng: &mut R) -> Extraction {
        let foreground = self.foreground(mask, rng);

        let dilated = if self.dilation_width > 0 {
            dilate(&foreground, self.element, self.dilation_width)
        } else {
            foreground.clone()
        };

        let map = AttentionMap::from_mask(&dilated, self.normalization);
        let maximum = map.maximum();

        Extraction {
            foreground,
            dilated,
            map,
            maximum,
        }
    }

    /// Flood-fill from every border seed and keep what was never reached.
    pub fn foreground<R: Rng + ?Sized>(&self, mask: &BooleanMap, rng: &mut R) -> BooleanMap {
        let (w, h) = (mask.width(), mask.height());
        if w == 0 || h == 0 {
            return mask.clone();
        }

        let seeds = if self.handle_border {
            jittered_border_seeds(w, h, rng)
        } else {
            border_seeds(w, h)
        };

        let mut fill = BackgroundFill::new(mask);
        for (x, y) in seeds {
            fill.fill_from(x, y);
        }
        fill.foreground()
    }
}
