//! CSVNest Services Layer
//!
//! Orchestration on top of the pure pipeline in `csvnest-processing`: the
//! upload queue, batch generation and export, CSV/ZIP encoding, and the
//! local session (login, theme, API key) backed by a key-value file.

pub mod archive;
pub mod batch;
pub mod session;

pub use archive::{create_export_archive, encode_csv, write_archive, ExportArchive};
pub use batch::{AddFilesOutcome, BatchService, FileQueue, GenerationReport};
pub use session::{LocalStore, SessionService};
