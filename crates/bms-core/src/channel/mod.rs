//! Channel extraction: source image to three Lab scalar grids.
//!
//! ```text
//! SourceImage --extract_channels--> [L, a, b]: ChannelMap
//! ```
//!
//! [`SourceImage`] validates its input at construction (non-empty, exactly
//! three channels), so extraction itself cannot fail.

mod channel_map;
mod extractor;
mod source;

pub use channel_map::{Channel, ChannelMap};
pub use extractor::extract_channels;
pub use source::SourceImage;
