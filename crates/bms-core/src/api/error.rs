//! Error types for the saliency pipeline.
//!
//! [`BmsError`] is the single error returned by the public API. Input and
//! configuration problems are rejected before any processing starts; sink
//! failures abort the run.

use std::fmt;

/// Boxed error produced by an [`ArtifactSink`](crate::sink::ArtifactSink).
pub type SinkError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reasons a source image is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Width or height is zero
    Empty {
        width: usize,
        height: usize,
    },
    /// Pixel data does not carry exactly three channels
    ChannelCount(usize),
    /// Buffer length does not match `width * height * channels`
    BufferLength {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty { width, height } => {
                write!(f, "image is empty ({}x{})", width, height)
            }
            InputError::ChannelCount(count) => {
                write!(f, "expected 3 color channels, got {}", count)
            }
            InputError::BufferLength { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} bytes, expected {}",
                    actual, expected
                )
            }
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold step must be a finite value greater than zero
    NonPositiveStep(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveStep(step) => {
                write!(f, "threshold step must be positive and finite, got {}", step)
            }
        }
    }
}

/// Unified error type for the saliency pipeline.
///
/// # Example
///
/// ```
/// use bms_core::{BmsError, SaliencyDetector, SaliencyOptions};
///
/// let result = SaliencyDetector::new(SaliencyOptions::new().threshold_step(0.0));
/// assert!(matches!(result, Err(BmsError::InvalidConfiguration(_))));
/// ```
#[derive(Debug)]
pub enum BmsError {
    /// The source image is empty or not three-channel
    InvalidInput(InputError),
    /// A configuration value is out of range
    InvalidConfiguration(ConfigError),
    /// The artifact sink failed; the computation was aborted
    Sink(SinkError),
}

impl fmt::Display for BmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmsError::InvalidInput(err) => write!(f, "invalid input: {}", err),
            BmsError::InvalidConfiguration(err) => write!(f, "invalid configuration: {}", err),
            BmsError::Sink(err) => write!(f, "artifact sink error: {}", err),
        }
    }
}

impl std::error::Error for BmsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BmsError::Sink(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<InputError> for BmsError {
    fn from(err: InputError) -> Self {
        BmsError::InvalidInput(err)
    }
}

impl From<ConfigError> for BmsError {
    fn from(err: ConfigError) -> Self {
        BmsError::InvalidConfiguration(err)
    }
}
