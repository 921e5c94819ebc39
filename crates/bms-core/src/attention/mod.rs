//! Attention extraction, the central step of the pipeline.
//!
//! ```text
//! BooleanMap
//!     |
//!     +--> border seeds (optionally jittered inward)
//!     |
//!     +--> 8-connected flood fill from each seed over same-valued pixels
//!     |        -> background labels
//!     |
//!     v
//! foreground = never reached
//!     |
//!     +--> dilate (optional)
//!     |
//!     v
//! AttentionMap (L2 or min-max normalized)
//! ```
//!
//! A region is salient for a given boolean map when it is enclosed: no path
//! of equal-valued pixels links it to the image border.

mod attention_map;
mod extractor;
mod flood_fill;
mod seeds;

pub use attention_map::{AttentionMap, Normalization};
pub(crate) use attention_map::rescale_to_u8;
pub use extractor::{AttentionExtractor, Extraction};
pub use flood_fill::BackgroundFill;
pub use seeds::{border_seeds, jittered_border_seeds, Seed};
