use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use uuid::Uuid;

/// Coarse classification of a queued file, fixed at upload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileKind {
    Svg,
    Image,
    Video,
    Other,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Svg => "SVG",
            FileKind::Image => "IMAGE",
            FileKind::Video => "VIDEO",
            FileKind::Other => "OTHER",
        }
    }
}

impl Display for FileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A file accepted into the upload queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    /// Where the file was picked up from. Never read by the pipeline.
    pub path: PathBuf,
    /// Original filename as shown to the user
    pub name: String,
    pub kind: FileKind,
}

impl UploadedFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, kind: FileKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
            name: name.into(),
            kind,
        }
    }
}
