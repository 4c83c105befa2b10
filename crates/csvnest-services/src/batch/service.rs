use std::path::Path;
use std::sync::Arc;

use csvnest_core::error::{AppError, AppResult, ErrorMetadata};
use csvnest_core::models::{
    GeneratedMetadata, GenerationSettings, PlatformRecord, Progress, UploadedFile,
};
use csvnest_processing::{intake_file, map_record, FilenameAnalyzer, MetadataAnalyzer};

use super::queue::{AddFilesOutcome, FileQueue};
use crate::archive::{create_export_archive, ExportArchive};

/// Outcome of one "generate all" run
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub success: usize,
    pub failed: usize,
    /// One [`AppError::Analysis`] per failed file, in queue order
    pub failures: Vec<AppError>,
}

/// Owns the upload queue, the generated metadata set and the progress counters.
///
/// Generation and export are separate steps: generation snapshots titles and
/// keywords using the settings at that time, export maps them with whatever
/// platform and image type are selected when it runs.
#[derive(Debug)]
pub struct BatchService {
    queue: FileQueue,
    generated: Vec<GeneratedMetadata>,
    progress: Progress,
    analyzer: Arc<dyn MetadataAnalyzer>,
}

impl Default for BatchService {
    fn default() -> Self {
        Self::new(Arc::new(FilenameAnalyzer))
    }
}

impl BatchService {
    pub fn new(analyzer: Arc<dyn MetadataAnalyzer>) -> Self {
        Self {
            queue: FileQueue::new(),
            generated: Vec::new(),
            progress: Progress::default(),
            analyzer,
        }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn files(&self) -> &[UploadedFile] {
        self.queue.files()
    }

    pub fn generated(&self) -> &[GeneratedMetadata] {
        &self.generated
    }

    /// Queue already-classified files. Files past the cap are dropped.
    pub fn add_files<I>(&mut self, files: I) -> AddFilesOutcome
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let outcome = self.queue.add(files);
        self.progress.uploaded = self.queue.len();

        if outcome.dropped > 0 {
            tracing::warn!(
                dropped = outcome.dropped,
                queued = self.queue.len(),
                "Upload queue full, extra files dropped"
            );
        }

        outcome
    }

    /// Classify and queue files picked from disk.
    pub fn add_paths<I, P>(&mut self, paths: I) -> AddFilesOutcome
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let files: Vec<UploadedFile> = paths
            .into_iter()
            .map(|p| intake_file(p.as_ref()))
            .collect();
        self.add_files(files)
    }

    /// Empty the queue and generated set and reset every counter.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.generated.clear();
        self.progress = Progress::default();
    }

    /// Run the analyzer over every queued file, in queue order.
    ///
    /// A file that fails is counted and skipped; the rest of the batch still
    /// runs. The previous generated set is replaced only once the run ends.
    #[tracing::instrument(skip(self, settings), fields(batch.analyzer = self.analyzer.name()))]
    pub async fn generate_all(&mut self, settings: &GenerationSettings) -> AppResult<GenerationReport> {
        if self.queue.is_empty() {
            return Err(AppError::NoFilesQueued);
        }

        self.progress.success = 0;
        self.progress.failed = 0;

        let mut out = Vec::with_capacity(self.queue.len());
        let mut failures = Vec::new();
        for file in self.queue.files() {
            match self.analyzer.analyze(file, settings).await {
                Ok(metadata) => {
                    out.push(metadata);
                    self.progress.success += 1;
                }
                Err(e) => {
                    let err = AppError::Analysis {
                        file: file.name.clone(),
                        message: e.to_string(),
                    };
                    tracing::warn!(
                        file_id = %file.id,
                        error_code = err.error_code(),
                        error = %err,
                        "Metadata generation failed"
                    );
                    self.progress.failed += 1;
                    failures.push(err);
                }
            }
        }

        self.generated = out;

        let report = GenerationReport {
            success: self.progress.success,
            failed: self.progress.failed,
            failures,
        };

        tracing::info!(
            success = report.success,
            failed = report.failed,
            "Metadata generation completed"
        );

        Ok(report)
    }

    /// Map every generated entry with the platform and image type selected now.
    pub fn records(&self, settings: &GenerationSettings) -> AppResult<Vec<PlatformRecord>> {
        if self.generated.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let records = self
            .generated
            .iter()
            .filter_map(|metadata| match self.queue.get(metadata.file_id) {
                Some(file) => Some(map_record(
                    file,
                    metadata,
                    settings.platform,
                    settings.image_type,
                )),
                None => {
                    tracing::warn!(
                        file_id = %metadata.file_id,
                        "Generated entry has no queued file, skipping"
                    );
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// Build the export archive for the current platform.
    #[tracing::instrument(skip(self, settings), fields(export.platform = %settings.platform))]
    pub fn export(&self, settings: &GenerationSettings) -> AppResult<ExportArchive> {
        let records = self.records(settings)?;

        let archive = create_export_archive(settings.platform, &records)
            .map_err(|e| AppError::Archive(format!("{:#}", e)))?;

        tracing::info!(
            archive = %archive.file_name,
            rows = archive.row_count,
            size_bytes = archive.bytes.len(),
            "Export archive created"
        );

        Ok(archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use csvnest_core::constants::MAX_QUEUED_FILES;
    use csvnest_core::models::{FileKind, ImageType, Platform};
    use csvnest_processing::AnalysisError;

    // Rejects any filename containing "broken"
    #[derive(Debug)]
    struct FlakyAnalyzer;

    #[async_trait]
    impl MetadataAnalyzer for FlakyAnalyzer {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn analyze(
            &self,
            file: &UploadedFile,
            settings: &GenerationSettings,
        ) -> Result<GeneratedMetadata, AnalysisError> {
            if file.name.contains("broken") {
                return Err(AnalysisError::InvalidFilename(file.name.clone()));
            }
            FilenameAnalyzer.analyze(file, settings).await
        }
    }

    fn file(name: &str) -> UploadedFile {
        UploadedFile::new(name, name, csvnest_processing::classify_kind(name))
    }

    #[tokio::test]
    async fn test_generate_all_rejects_empty_queue_without_touching_counters() {
        let mut service = BatchService::default();
        let before = service.progress();

        let result = service.generate_all(&GenerationSettings::default()).await;

        assert!(matches!(result, Err(AppError::NoFilesQueued)));
        assert_eq!(service.progress(), before);
        assert!(service.generated().is_empty());
    }

    #[tokio::test]
    async fn test_generate_all_counts_successes() {
        let mut service = BatchService::default();
        service.add_files(vec![file("Summer_Beach.jpg"), file("logo.svg")]);

        let report = service
            .generate_all(&GenerationSettings::default())
            .await
            .unwrap();

        assert_eq!((report.success, report.failed), (2, 0));
        assert!(report.failures.is_empty());
        assert_eq!(
            service.progress(),
            Progress {
                uploaded: 2,
                success: 2,
                failed: 0
            }
        );
        assert_eq!(service.generated()[0].title, "Summer Beach");
        assert_eq!(service.generated()[1].title, "logo");
    }

    #[tokio::test]
    async fn test_per_file_failure_does_not_abort_batch() {
        let mut service = BatchService::new(Arc::new(FlakyAnalyzer));
        service.add_files(vec![
            file("a.jpg"),
            file("broken.jpg"),
            file("c.png"),
        ]);

        let report = service
            .generate_all(&GenerationSettings::default())
            .await
            .unwrap();

        assert_eq!((report.success, report.failed), (2, 1));
        assert_eq!(report.failures.len(), 1);
        match &report.failures[0] {
            AppError::Analysis { file, message } => {
                assert_eq!(file, "broken.jpg");
                assert!(message.contains("broken.jpg"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(report.failures[0].error_code(), "ANALYSIS_FAILED");
        let ids: Vec<_> = service.generated().iter().map(|m| m.file_id).collect();
        assert_eq!(ids, vec![service.files()[0].id, service.files()[2].id]);
    }

    #[tokio::test]
    async fn test_regenerate_replaces_previous_results_and_resets_counters() {
        let mut service = BatchService::default();
        service.add_files(vec![file("a.jpg")]);
        service.generate_all(&GenerationSettings::default()).await.unwrap();
        service.add_files(vec![file("b.jpg")]);

        let settings = GenerationSettings {
            image_type: ImageType::Vector,
            ..Default::default()
        };
        let report = service.generate_all(&settings).await.unwrap();

        assert_eq!(report.success, 2);
        assert_eq!(service.progress().success, 2);
        assert_eq!(service.generated().len(), 2);
        assert!(service.generated().iter().all(|m| m.title.ends_with("– Vector")));
    }

    #[tokio::test]
    async fn test_settings_change_after_generation_is_not_retroactive() {
        let mut service = BatchService::default();
        service.add_files(vec![file("Mountain_Lake.jpg")]);
        service.generate_all(&GenerationSettings::default()).await.unwrap();

        let changed = GenerationSettings {
            image_type: ImageType::Vector,
            ..Default::default()
        };
        let records = service.records(&changed).unwrap();
        assert_eq!(records[0].get("title"), Some("Mountain Lake"));
    }

    #[test]
    fn test_export_without_generation_is_rejected() {
        let mut service = BatchService::default();
        service.add_files(vec![file("a.jpg")]);
        assert!(matches!(
            service.export(&GenerationSettings::default()),
            Err(AppError::NothingToExport)
        ));
    }

    #[tokio::test]
    async fn test_export_uses_platform_selected_at_export_time() {
        let mut service = BatchService::default();
        service.add_files(vec![file("Autumn_Forest.jpg")]);
        service.generate_all(&GenerationSettings::default()).await.unwrap();

        let general = service.records(&GenerationSettings::default()).unwrap();
        let adobe_settings = GenerationSettings {
            platform: Platform::AdobeStock,
            ..Default::default()
        };
        let adobe = service.records(&adobe_settings).unwrap();

        assert_eq!(general[0].get("title"), Some("Autumn Forest"));
        assert_eq!(adobe[0].get("Title"), Some("Autumn Forest"));
        assert_ne!(general[0].headers(), adobe[0].headers());

        let archive = service.export(&adobe_settings).unwrap();
        assert_eq!(archive.file_name, "metadata_adobe_stock.zip");
        assert_eq!(archive.row_count, 1);
    }

    #[test]
    fn test_add_files_updates_uploaded_and_caps() {
        let mut service = BatchService::default();
        let batch: Vec<UploadedFile> = (0..MAX_QUEUED_FILES + 10)
            .map(|i| file(&format!("f{}.jpg", i)))
            .collect();

        let outcome = service.add_files(batch);

        assert_eq!(outcome.dropped, 10);
        assert_eq!(service.progress().uploaded, MAX_QUEUED_FILES);
        assert_eq!(service.files().last().map(|f| f.name.as_str()), Some("f999.jpg"));
    }

    #[test]
    fn test_add_paths_classifies() {
        let mut service = BatchService::default();
        service.add_paths(["/tmp/x/logo.svg", "/tmp/x/clip.mov", "/tmp/x/notes.txt"]);
        let kinds: Vec<FileKind> = service.files().iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FileKind::Svg, FileKind::Video, FileKind::Other]);
    }

    #[tokio::test]
    async fn test_clear_resets_everything() {
        let mut service = BatchService::default();
        service.add_files(vec![file("a.jpg")]);
        service.generate_all(&GenerationSettings::default()).await.unwrap();

        service.clear();

        assert!(service.files().is_empty());
        assert!(service.generated().is_empty());
        assert_eq!(service.progress(), Progress::default());
        assert!(matches!(
            service.export(&GenerationSettings::default()),
            Err(AppError::NothingToExport)
        ));
    }
}
