//! SaliencyDetector -- the primary entry point for the crate.
//!
//! [`SaliencyDetector`] validates a [`SaliencyOptions`] once and then runs
//! the full pipeline over any number of images.

use rand::Rng;

use super::error::BmsError;
use super::options::SaliencyOptions;
use crate::attention::{AttentionExtractor, AttentionMap};
use crate::channel::{extract_channels, SourceImage};
use crate::mask::{BooleanMap, MapRefiner};
use crate::output::{SaliencyAccumulator, SaliencyMap};
use crate::sink::{ArtifactSink, MaskStage, UnitKey};
use crate::threshold::{Polarity, ThresholdSweeper};

/// Result of one saliency computation.
#[derive(Debug, Clone)]
pub struct SaliencyReport {
    /// The rescaled 8-bit saliency map
    pub map: SaliencyMap,
    /// Attention maps accumulated, i.e. (channel, threshold, polarity) units
    pub units: usize,
    /// Thresholds swept per channel, in L, a, b order
    pub thresholds_per_channel: [usize; 3],
}

/// Boolean Map saliency detector.
///
/// # Pipeline
///
/// ```text
/// SourceImage -> [L, a, b] -> thresholds -> {above, at_most}
///     -> opening -> border flood fill -> dilation -> normalize
///     -> accumulate -> min-max to 0..=255
/// ```
///
/// # Example
///
/// ```
/// use bms_core::{NullSink, SaliencyDetector, SaliencyOptions, SourceImage};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let data = vec![40u8; 8 * 8 * 3];
/// let image = SourceImage::from_interleaved(&data, 8, 8, 3).unwrap();
///
/// let detector = SaliencyDetector::new(SaliencyOptions::new()).unwrap();
/// let report = detector
///     .compute(&image, &mut StdRng::seed_from_u64(1), &NullSink)
///     .unwrap();
///
/// assert_eq!(report.map.width(), 8);
/// // A flat image has no thresholds and a uniform (zero) saliency map
/// assert_eq!(report.units, 0);
/// assert!(report.map.pixels().iter().all(|&p| p == 0));
/// ```
#[derive(Debug, Clone)]
pub struct SaliencyDetector {
    sweeper: ThresholdSweeper,
    refiner: MapRefiner,
    extractor: AttentionExtractor,
}

impl SaliencyDetector {
    /// # Errors
    ///
    /// [`BmsError::InvalidConfiguration`] if the threshold step is not a
    /// positive finite number.
    pub fn new(options: SaliencyOptions) -> Result<Self, BmsError> {
        let sweeper = ThresholdSweeper::new(options.threshold_step)?;
        let refiner = MapRefiner::new(options.opening_width, options.structuring_element);
        let extractor = AttentionExtractor::new(
            options.handle_border,
            options.dilation_width,
            options.normalization,
            options.structuring_element,
        );
        Ok(Self {
            sweeper,
            refiner,
            extractor,
        })
    }

    /// Run the whole pipeline sequentially with a single jitter stream.
    ///
    /// Channels run in L, a, b order, thresholds ascending, and within one
    /// threshold the `above` mask before the `at_most` mask.
    pub fn compute<R, S>(
        &self,
        image: &SourceImage,
        rng: &mut R,
        sink: &S,
    ) -> Result<SaliencyReport, BmsError>
    where
        R: Rng + ?Sized,
        S: ArtifactSink + ?Sized,
    {
        let mut accumulator = SaliencyAccumulator::new(image.width(), image.height());
        let mut thresholds = [0usize; 3];

        for channel in extract_channels(image) {
            sink.channel(&channel).map_err(BmsError::Sink)?;

            for pair in self.sweeper.sweep(&channel) {
                thresholds[channel.channel().index()] += 1;
                for polarity in Polarity::BOTH {
                    let key = UnitKey {
                        channel: channel.channel(),
                        threshold: pair.threshold,
                        polarity,
                    };
                    let map = self.process_unit(&key, pair.mask(polarity), rng, sink)?;
                    accumulator.add(&map);
                }
            }
        }

        Ok(SaliencyReport {
            map: accumulator.finish(),
            units: accumulator.count(),
            thresholds_per_channel: thresholds,
        })
    }

    /// Refine and extract one boolean map, reporting each stage to `sink`.
    pub fn process_unit<R, S>(
        &self,
        key: &UnitKey,
        mask: &BooleanMap,
        rng: &mut R,
        sink: &S,
    ) -> Result<AttentionMap, BmsError>
    where
        R: Rng + ?Sized,
        S: ArtifactSink + ?Sized,
    {
        sink.mask(key, MaskStage::Thresholded, mask)
            .map_err(BmsError::Sink)?;

        let opened = self.refiner.refine(mask);
        sink.mask(key, MaskStage::Opened, &opened)
            .map_err(BmsError::Sink)?;

        let extraction = self.extractor.extract(&opened, rng);
        sink.mask(key, MaskStage::Foreground, &extraction.foreground)
            .map_err(BmsError::Sink)?;
        sink.mask(key, MaskStage::Dilated, &extraction.dilated)
            .map_err(BmsError::Sink)?;
        sink.attention(key, &extraction.map, extraction.maximum)
            .map_err(BmsError::Sink)?;

        Ok(extraction.map)
    }
}

#[cfg(feature = "rayon")]
mod parallel {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rayon::prelude::*;

    use super::*;
    use crate::channel::ChannelMap;

    /// Derive the jitter seed of the `index`-th unit from a run seed.
    ///
    /// Units are indexed in sequential processing order, so a given unit
    /// always gets the same stream regardless of which worker runs it.
    pub fn unit_seed(seed: u64, index: usize) -> u64 {
        seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    struct Unit<'a> {
        index: usize,
        channel: &'a ChannelMap,
        threshold: f64,
        polarity: Polarity,
    }

    impl SaliencyDetector {
        /// Run every (channel, threshold, polarity) unit in parallel.
        ///
        /// Each unit draws jitter from its own stream seeded by
        /// [`unit_seed`]; workers keep partial sums that are merged at the
        /// end. With border handling disabled the result matches
        /// [`compute`](Self::compute) up to floating-point rounding.
        pub fn compute_par<S>(
            &self,
            image: &SourceImage,
            seed: u64,
            sink: &S,
        ) -> Result<SaliencyReport, BmsError>
        where
            S: ArtifactSink + ?Sized,
        {
            let (w, h) = (image.width(), image.height());
            let channels = extract_channels(image);
            let mut thresholds = [0usize; 3];
            let mut units = Vec::new();

            for channel in &channels {
                sink.channel(channel).map_err(BmsError::Sink)?;
                for threshold in self.sweeper.thresholds(channel) {
                    thresholds[channel.channel().index()] += 1;
                    for polarity in Polarity::BOTH {
                        let index = units.len();
                        units.push(Unit {
                            index,
                            channel,
                            threshold,
                            polarity,
                        });
                    }
                }
            }

            let accumulator = units
                .par_iter()
                .try_fold(
                    || SaliencyAccumulator::new(w, h),
                    |mut acc, unit| {
                        let mask = match unit.polarity {
                            Polarity::Above => BooleanMap::above(unit.channel, unit.threshold),
                            Polarity::AtMost => BooleanMap::at_most(unit.channel, unit.threshold),
                        };
                        let key = UnitKey {
                            channel: unit.channel.channel(),
                            threshold: unit.threshold,
                            polarity: unit.polarity,
                        };
                        let mut rng = StdRng::seed_from_u64(unit_seed(seed, unit.index));
                        let map = self.process_unit(&key, &mask, &mut rng, sink)?;
                        acc.add(&map);
                        Ok::<_, BmsError>(acc)
                    },
                )
                .try_reduce(
                    || SaliencyAccumulator::new(w, h),
                    |a, b| Ok(a.merge(b)),
                )?;

            Ok(SaliencyReport {
                map: accumulator.finish(),
                units: accumulator.count(),
                thresholds_per_channel: thresholds,
            })
        }
    }
}

#[cfg(feature = "rayon")]
pub use parallel::unit_seed;
