use csvnest_core::constants::MAX_QUEUED_FILES;
use csvnest_core::models::UploadedFile;
use serde::Serialize;
use uuid::Uuid;

/// Result of adding a batch of files to the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddFilesOutcome {
    pub added: usize,
    /// Files past the queue cap, silently discarded
    pub dropped: usize,
}

/// Ordered upload queue, capped at [`MAX_QUEUED_FILES`].
///
/// New files are appended in order; once the cap is reached further files are
/// dropped. Existing entries are never evicted.
#[derive(Debug, Clone, Default)]
pub struct FileQueue {
    files: Vec<UploadedFile>,
}

impl FileQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I>(&mut self, files: I) -> AddFilesOutcome
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let mut outcome = AddFilesOutcome {
            added: 0,
            dropped: 0,
        };

        for file in files {
            if self.files.len() < MAX_QUEUED_FILES {
                self.files.push(file);
                outcome.added += 1;
            } else {
                outcome.dropped += 1;
            }
        }

        outcome
    }

    pub fn get(&self, id: Uuid) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
