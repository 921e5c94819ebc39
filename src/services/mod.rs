pub mod artifact_writer;
pub mod saliency_service;

pub use artifact_writer::FileArtifactSink;
pub use saliency_service::{ComputeSummary, SaliencyService};
