//! bms-core: Boolean Map saliency detection
//!
//! This library computes a per-pixel saliency map for an RGB image using
//! the Boolean Map approach: an image is characterized by a large set of
//! binary maps obtained by thresholding its color channels, and pixels that
//! form regions enclosed away from the image border are the ones that
//! attract attention.
//!
//! # Quick Start
//!
//! The [`SaliencyDetector`] is the primary entry point:
//!
//! ```
//! use bms_core::{NullSink, SaliencyDetector, SaliencyOptions, SourceImage};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // 4x4 black image with a bright 2x2 block in the middle
//! let mut data = vec![0u8; 4 * 4 * 3];
//! for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
//!     let i = (y * 4 + x) * 3;
//!     data[i..i + 3].copy_from_slice(&[200, 200, 200]);
//! }
//! let image = SourceImage::from_interleaved(&data, 4, 4, 3).unwrap();
//!
//! let options = SaliencyOptions::new().opening_width(0).dilation_width(0);
//! let detector = SaliencyDetector::new(options).unwrap();
//! let report = detector
//!     .compute(&image, &mut StdRng::seed_from_u64(0), &NullSink)
//!     .unwrap();
//!
//! assert_eq!(report.map.get(1, 1), 255);
//! assert_eq!(report.map.get(0, 0), 0);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! sRGB input
//!     |
//!     v
//! LinearRgb -> XYZ (D65) -> CIE Lab     (color)
//!     |
//!     v
//! [L, a, b] channels, 8-bit scale       (channel)
//!     |
//!     v
//! thresholds min, min+step, ... < max   (threshold)
//!     |
//!     +---> value >  t
//!     +---> value <= t
//!              |
//!              v
//!          opening (erode, dilate)      (mask)
//!              |
//!              v
//!          border flood fill            (attention)
//!              |
//!          foreground -> dilate -> normalize
//!              |
//!              v
//!          sum of attention maps        (output)
//!              |
//!              v
//!          min-max to 0..=255
//! ```
//!
//! Intermediate grids can be observed through an [`ArtifactSink`]; the
//! numeric result never depends on it.
//!
//! # Randomness
//!
//! Border handling jitters flood-fill seeds inward. The sequential
//! [`SaliencyDetector::compute`] draws from a caller-supplied [`rand::Rng`].
//! With the `rayon` feature, `SaliencyDetector::compute_par` derives one
//! stream per unit from a `u64` seed so results do not depend on
//! scheduling.

pub mod api;
pub mod attention;
pub mod channel;
pub mod color;
pub mod mask;
pub mod output;
pub mod sink;
pub mod threshold;


#[cfg(feature = "rayon")]
pub use api::unit_seed;
pub use api::{
    BmsError, ConfigError, InputError, SaliencyDetector, SaliencyOptions, SaliencyReport,
    SinkError,
};
pub use attention::{AttentionExtractor, AttentionMap, Extraction, Normalization};
pub use channel::{extract_channels, Channel, ChannelMap, SourceImage};
pub use color::{Lab, LinearRgb, Srgb};
pub use mask::{BooleanMap, MapRefiner, StructuringElement};
pub use output::{SaliencyAccumulator, SaliencyMap};
pub use sink::{ArtifactSink, MaskStage, NullSink, UnitKey};
pub use threshold::{MaskPair, Polarity, ThresholdSweeper};
