//! Accumulation and the final saliency map.

mod accumulator;
mod saliency_map;

pub use accumulator::SaliencyAccumulator;
pub use saliency_map::SaliencyMap;
