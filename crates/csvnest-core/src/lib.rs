//! CSVNest Core Library
//!
//! This crate provides core domain models, error types, configuration, and validation
//! that are shared across all CSVNest components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult, ErrorMetadata, LogLevel};
pub use models::{
    FileKind, GeneratedMetadata, GenerationSettings, ImageType, Platform, PlatformRecord,
    Progress, Theme, Toggle, UploadedFile, User,
};
