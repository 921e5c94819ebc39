//! Saliency options and configuration.

use crate::attention::Normalization;
use crate::mask::StructuringElement;

/// Configuration for a [`SaliencyDetector`](crate::SaliencyDetector).
///
/// The defaults are the values commonly used with Boolean Map saliency on
/// images around 400 pixels wide; nothing in the pipeline depends on them.
///
/// # Example
///
/// ```
/// use bms_core::{Normalization, SaliencyOptions};
///
/// let options = SaliencyOptions::new()
///     .threshold_step(16.0)
///     .normalization(Normalization::MinMax)
///     .handle_border(true);
/// assert_eq!(options.opening_width, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyOptions {
    /// Distance between consecutive thresholds on the 8-bit Lab scale.
    ///
    /// Default: `8.0`
    pub threshold_step: f32,

    /// Erosion/dilation iterations of the opening applied to every boolean map.
    ///
    /// Default: `2`
    pub opening_width: u32,

    /// Dilation iterations applied to every foreground mask.
    ///
    /// Default: `3`
    pub dilation_width: u32,

    /// Attention map normalization.
    ///
    /// Default: [`Normalization::L2`]
    pub normalization: Normalization,

    /// Jitter border seeds inward at random.
    ///
    /// Default: `false`
    pub handle_border: bool,

    /// Structuring element for opening and dilation.
    ///
    /// Default: [`StructuringElement::Square`]
    pub structuring_element: StructuringElement,
}

impl Default for SaliencyOptions {
    fn default() -> Self {
        Self {
            threshold_step: 8.0,
            opening_width: 2,
            dilation_width: 3,
            normalization: Normalization::L2,
            handle_border: false,
            structuring_element: StructuringElement::Square,
        }
    }
}

impl SaliencyOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn threshold_step(mut self, step: f32) -> Self {
        self.threshold_step = step;
        self
    }

    #[inline]
    pub fn opening_width(mut self, width: u32) -> Self {
        self.opening_width = width;
        self
    }

    #[inline]
    pub fn dilation_width(mut self, width: u32) -> Self {
        self.dilation_width = width;
        self
    }

    #[inline]
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[inline]
    pub fn handle_border(mut self, enabled: bool) -> Self {
        self.handle_border = enabled;
        self
    }

    #[inline]
    pub fn structuring_element(mut self, element: StructuringElement) -> Self {
        self.structuring_element = element;
        self
    }
}
