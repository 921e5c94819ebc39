//! Diagnostic artifact sink.
//!
//! The pipeline reports every intermediate grid to an [`ArtifactSink`]. The
//! numeric result never depends on the sink; [`NullSink`] discards
//! everything and is what tests and library callers normally pass.
//!
//! Methods take `&self` so one sink can be shared by parallel workers;
//! implementations that write state must synchronize internally.

use crate::api::SinkError;
use crate::attention::AttentionMap;
use crate::channel::{Channel, ChannelMap};
use crate::mask::BooleanMap;
use crate::threshold::Polarity;

/// Identifies one (channel, threshold, polarity) unit of work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitKey {
    pub channel: Channel,
    pub threshold: f64,
    pub polarity: Polarity,
}

/// Which point of the per-unit pipeline a mask was captured at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskStage {
    /// Straight out of the threshold sweep
    Thresholded,
    /// After morphological opening
    Opened,
    /// Pixels not reached by any border flood fill
    Foreground,
    /// Foreground after dilation
    Dilated,
}

/// Receiver for intermediate results.
///
/// Any error aborts the computation with [`BmsError::Sink`](crate::BmsError::Sink).
pub trait ArtifactSink: Send + Sync {
    /// Called once per channel before its sweep.
    fn channel(&self, map: &ChannelMap) -> Result<(), SinkError>;

    /// Called for each mask stage of each unit.
    fn mask(&self, key: &UnitKey, stage: MaskStage, mask: &BooleanMap) -> Result<(), SinkError>;

    /// Called with each normalized attention map and its maximum value,
    /// before any display rescaling.
    fn attention(&self, key: &UnitKey, map: &AttentionMap, maximum: f64) -> Result<(), SinkError>;
}

/// A sink that discards every artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ArtifactSink for NullSink {
    #[inline]
    fn channel(&self, _map: &ChannelMap) -> Result<(), SinkError> {
        Ok(())
    }

    #[inline]
    fn mask(&self, _key: &UnitKey, _stage: MaskStage, _mask: &BooleanMap) -> Result<(), SinkError> {
        Ok(())
    }

    #[inline]
    fn attention(
        &self,
        _key: &UnitKey,
        _map: &AttentionMap,
        _maximum: f64,
    ) -> Result<(), SinkError> {
        Ok(())
    }
}
