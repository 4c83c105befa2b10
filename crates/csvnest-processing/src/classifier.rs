//! File kind classification at intake

use std::path::Path;

use csvnest_core::constants::ACCEPTED_EXTENSIONS;
use csvnest_core::models::{FileKind, UploadedFile};

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Classify a file by its extension (case-insensitive).
pub fn classify_kind(filename: &str) -> FileKind {
    match extension_of(filename).as_deref() {
        Some("svg") => FileKind::Svg,
        Some("jpg" | "jpeg" | "png") => FileKind::Image,
        Some("mp4" | "mov" | "avi" | "webm") => FileKind::Video,
        _ => FileKind::Other,
    }
}

/// Whether the extension is one file intake advertises. Advisory only.
pub fn is_accepted_extension(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Build a queue entry for a picked file, classifying it once.
pub fn intake_file(path: &Path) -> UploadedFile {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !is_accepted_extension(&name) {
        tracing::debug!(
            filename = %name,
            "Extension outside the accepted list, queueing as OTHER"
        );
    }

    let kind = classify_kind(&name);
    UploadedFile::new(path, name, kind)
}
