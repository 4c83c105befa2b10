//! Error types module
//!
//! This module provides the core error types used throughout CSVNest.
//! All user-facing failures are unified under the `AppError` enum. Every
//! variant is locally contained: none of them leave the session, queue, or
//! generated metadata in an unusable state.

use std::io;

/// Result alias for operations that fail with [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like rejected actions
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be presented to the user.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "NOTHING_TO_EXPORT")
    fn error_code(&self) -> &'static str;

    /// User-facing notice (may differ from the internal error message)
    fn client_message(&self) -> String;

    /// Suggested next step for the user
    fn suggested_action(&self) -> Option<&'static str>;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Login required")]
    LoginRequired,

    #[error("No files queued")]
    NoFilesQueued,

    #[error("Nothing to export")]
    NothingToExport,

    #[error("Analysis failed for {file}: {message}")]
    Analysis { file: String, message: String },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

/// Static metadata for each variant: (error_code, suggested_action, log_level).
fn app_error_static_metadata(err: &AppError) -> (&'static str, Option<&'static str>, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (
            "INVALID_INPUT",
            Some("Check the supplied settings and try again"),
            LogLevel::Debug,
        ),
        AppError::InvalidEmail(_) => (
            "INVALID_EMAIL",
            Some("Use an address of the form name@example.com"),
            LogLevel::Debug,
        ),
        AppError::LoginRequired => (
            "LOGIN_REQUIRED",
            Some("Log in with your email to use the generator"),
            LogLevel::Debug,
        ),
        AppError::NoFilesQueued => (
            "NO_FILES_QUEUED",
            Some("Add files before generating"),
            LogLevel::Warn,
        ),
        AppError::NothingToExport => (
            "NOTHING_TO_EXPORT",
            Some("Run generation before exporting"),
            LogLevel::Warn,
        ),
        AppError::Analysis { .. } => (
            "ANALYSIS_FAILED",
            Some("Rename the file and try again"),
            LogLevel::Warn,
        ),
        AppError::Archive(_) => ("ARCHIVE_ERROR", None, LogLevel::Error),
        AppError::Io(_) => (
            "IO_ERROR",
            Some("Check file permissions and available disk space"),
            LogLevel::Error,
        ),
        AppError::Serialization(_) => ("SERIALIZATION_ERROR", None, LogLevel::Error),
        AppError::InternalWithSource { .. } => ("INTERNAL_ERROR", None, LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).0
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::InvalidEmail(_) => "Enter valid email".to_string(),
            AppError::LoginRequired => {
                "Login required. Please log in with your email to use the generator.".to_string()
            }
            AppError::NoFilesQueued => "Please upload files first".to_string(),
            AppError::NothingToExport => "Nothing to export. Generate first.".to_string(),
            AppError::Analysis { file, .. } => format!("Could not generate metadata for {}", file),
            AppError::Archive(_) => "Failed to build export archive".to_string(),
            AppError::Io(_) => "Failed to access local files".to_string(),
            AppError::Serialization(_) => "Failed to read or write saved data".to_string(),
            AppError::InternalWithSource { .. } => "Internal error".to_string(),
        }
    }
}
