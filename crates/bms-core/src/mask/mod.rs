//! Boolean maps and their morphology.

mod boolean_map;
mod morphology;
mod refiner;

pub use boolean_map::BooleanMap;
pub use morphology::{dilate, erode, StructuringElement};
pub use refiner::MapRefiner;
