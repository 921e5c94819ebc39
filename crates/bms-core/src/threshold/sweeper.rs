//! Threshold enumeration over one channel.

use crate::api::ConfigError;
use crate::channel::ChannelMap;
use crate::mask::BooleanMap;

/// Which half of a thresholded pair a mask is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// `value > threshold`
    Above,
    /// `value <= threshold`
    AtMost,
}

impl Polarity {
    /// Processing order within a pair.
    pub const BOTH: [Polarity; 2] = [Polarity::Above, Polarity::AtMost];
}

/// The two complementary masks produced by one threshold.
#[derive(Debug, Clone)]
pub struct MaskPair {
    pub threshold: f64,
    pub above: BooleanMap,
    pub at_most: BooleanMap,
}

impl MaskPair {
    #[inline]
    pub fn mask(&self, polarity: Polarity) -> &BooleanMap {
        match polarity {
            Polarity::Above => &self.above,
            Polarity::AtMost => &self.at_most,
        }
    }
}

/// Enumerates `min, min + step, min + 2*step, ...` while below the channel
/// maximum, and thresholds the channel at each value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSweeper {
    step: f32,
}

impl ThresholdSweeper {
    /// # Errors
    ///
    /// [`ConfigError::NonPositiveStep`] if `step` is not a finite value above zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bms_core::ThresholdSweeper;
    ///
    /// assert!(ThresholdSweeper::new(8.0).is_ok());
    /// assert!(ThresholdSweeper::new(0.0).is_err());
    /// assert!(ThresholdSweeper::new(f32::NAN).is_err());
    /// ```
    pub fn new(step: f32) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        Ok(Self { step })
    }

    /// Thresholds for `channel`, ascending. Empty for a flat channel.
    pub fn thresholds(&self, channel: &ChannelMap) -> Vec<f64> {
        let Some((min, max)) = channel.min_max() else {
            return Vec::new();
        };
        let (min, max, step) = (min as f64, max as f64, self.step as f64);

        // Multiply instead of accumulating so long sweeps do not drift
        (0u64..)
            .map(|k| min + k as f64 * step)
            .take_while(|&t| t < max)
            .collect()
    }

    /// Lazily threshold `channel` at every sweep value.
    pub fn sweep<'a>(&self, channel: &'a ChannelMap) -> impl Iterator<Item = MaskPair> + 'a {
        self.thresholds(channel)
            .into_iter()
            .map(move |threshold| MaskPair {
                threshold,
                above: BooleanMap::above(channel, threshold),
                at_most: BooleanMap::at_most(channel, threshold),
            })
    }
}
