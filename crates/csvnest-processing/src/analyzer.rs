//! Metadata analyzers
//!
//! An analyzer turns one queued file into a {title, keywords} pair. The only
//! implementation shipped is [`FilenameAnalyzer`]; a content-aware analyzer
//! would plug in behind the same trait without touching batch or export code.

use std::fmt::Debug;

use async_trait::async_trait;
use csvnest_core::models::{GeneratedMetadata, GenerationSettings, UploadedFile};

use crate::keywords::build_keywords;
use crate::normalizer::normalize_filename;
use crate::title::build_title;

/// Per-file analysis failure. Counted by the batch, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),
}

/// Trait every metadata source implements
#[async_trait]
pub trait MetadataAnalyzer: Send + Sync + Debug {
    /// Analyzer name/identifier
    fn name(&self) -> &str;

    /// Produce metadata for one file using the given settings
    async fn analyze(
        &self,
        file: &UploadedFile,
        settings: &GenerationSettings,
    ) -> Result<GeneratedMetadata, AnalysisError>;
}

/// Run the filename heuristic for one file.
pub fn generate_from_filename(
    file: &UploadedFile,
    settings: &GenerationSettings,
) -> Result<GeneratedMetadata, AnalysisError> {
    if file.name.trim().is_empty() {
        return Err(AnalysisError::InvalidFilename(file.name.clone()));
    }

    let phrase = normalize_filename(&file.name);
    let title = build_title(&phrase, settings.image_type, settings);
    let keywords = build_keywords(&phrase, settings);

    tracing::debug!(
        file_id = %file.id,
        filename = %file.name,
        phrase = %phrase,
        keyword_count = keywords.len(),
        "Generated metadata from filename"
    );

    Ok(GeneratedMetadata {
        file_id: file.id,
        title,
        keywords,
    })
}

/// Filename-only heuristic analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameAnalyzer;

#[async_trait]
impl MetadataAnalyzer for FilenameAnalyzer {
    fn name(&self) -> &str {
        "filename"
    }

    async fn analyze(
        &self,
        file: &UploadedFile,
        settings: &GenerationSettings,
    ) -> Result<GeneratedMetadata, AnalysisError> {
        generate_from_filename(file, settings)
    }
}
