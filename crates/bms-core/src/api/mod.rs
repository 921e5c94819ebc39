//! Public API for the bms-core crate.
//!
//! This module provides the high-level API: [`SaliencyDetector`],
//! [`SaliencyOptions`] and the [`BmsError`] error type.

mod detector;
mod error;
mod options;

#[cfg(feature = "rayon")]
pub use detector::unit_seed;
pub use detector::{SaliencyDetector, SaliencyReport};
pub use error::{BmsError, ConfigError, InputError, SinkError};
pub use options::SaliencyOptions;
