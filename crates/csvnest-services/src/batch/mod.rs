//! Upload queue and the generate/export batch workflow

mod queue;
mod service;

pub use queue::{AddFilesOutcome, FileQueue};
pub use service::{BatchService, GenerationReport};
