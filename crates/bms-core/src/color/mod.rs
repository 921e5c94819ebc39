//! Color types and conversion utilities
//!
//! Source pixels are 8-bit sRGB. The saliency channels are CIE Lab, reached
//! through linear RGB and CIE XYZ:
//!
//! ```text
//! Srgb (8-bit) --LUT--> LinearRgb --matrix--> XYZ --f(t)--> Lab
//! ```
//!
//! # Example
//!
//! ```
//! use bms_core::{Lab, LinearRgb, Srgb};
//!
//! let linear = LinearRgb::from(Srgb::from_u8(128, 64, 32));
//! let lab = Lab::from(linear);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod srgb;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
