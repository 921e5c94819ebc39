//! Threshold sweep: one channel to a sequence of complementary mask pairs.

mod sweeper;

pub use sweeper::{MaskPair, Polarity, ThresholdSweeper};
