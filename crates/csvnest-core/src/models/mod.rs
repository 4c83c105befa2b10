//! Data models for the application
//!
//! Each sub-module represents a specific feature area: queued files, generation
//! settings, target platforms, generated metadata, export records, and the local session.

mod file;
mod metadata;
mod platform;
mod record;
mod session;
mod settings;

pub use file::*;
pub use metadata::*;
pub use platform::*;
pub use record::*;
pub use session::*;
pub use settings::*;
