use anyhow::{Context, Result};
use csvnest_core::constants::ARCHIVE_MEMBERS;
use csvnest_core::models::{Platform, PlatformRecord};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A finished export, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ExportArchive {
    /// Download name, e.g. `metadata_general.zip`
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Data rows in each CSV member (header excluded)
    pub row_count: usize,
}

/// Sanitize filename for archive entry to prevent path traversal.
/// Extracts only the base name (strips path components like `../`).
fn sanitize_archive_filename(filename: &str, fallback: &str) -> String {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .unwrap_or(fallback)
        .to_string()
}

/// Serialize records to CSV text: one header row from the first record's
/// field names, then one row per record. Quotes only when needed, CRLF rows.
/// The last row is terminated too, so non-empty output always ends in `\r\n`.
pub fn encode_csv(records: &[PlatformRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    if let Some(first) = records.first() {
        writer
            .write_record(first.headers())
            .context("Failed to write CSV header")?;
    }

    for (index, record) in records.iter().enumerate() {
        writer
            .write_record(record.values())
            .with_context(|| format!("Failed to write CSV row {}", index + 1))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;

    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Create a ZIP archive from named in-memory members
pub fn create_zip_archive(members: &[(&str, &[u8])]) -> Result<Vec<u8>> {
    use zip::write::{FileOptions, ZipWriter};
    use zip::CompressionMethod;

    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for (index, (name, data)) in members.iter().enumerate() {
            let safe_filename = sanitize_archive_filename(name, &format!("member_{}.csv", index));

            zip.start_file(safe_filename.as_str(), options)
                .with_context(|| format!("Failed to add file to ZIP: {}", safe_filename))?;
            zip.write_all(data)
                .with_context(|| format!("Failed to write file data to ZIP: {}", safe_filename))?;
        }

        zip.finish().context("Failed to finalize ZIP archive")?;
    }

    Ok(buffer)
}

/// Encode records once and store the same CSV body under every export member name.
pub fn create_export_archive(platform: Platform, records: &[PlatformRecord]) -> Result<ExportArchive> {
    let csv_text = encode_csv(records)?;
    let members: Vec<(&str, &[u8])> = ARCHIVE_MEMBERS
        .iter()
        .map(|name| (*name, csv_text.as_bytes()))
        .collect();

    let bytes = create_zip_archive(&members)?;

    Ok(ExportArchive {
        file_name: platform.archive_name(),
        bytes,
        row_count: records.len(),
    })
}

/// Write an archive into `output_dir`, creating the directory if needed.
pub async fn write_archive(output_dir: &Path, archive: &ExportArchive) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let file_name = sanitize_archive_filename(&archive.file_name, "metadata.zip");
    let path = output_dir.join(file_name);

    tokio::fs::write(&path, &archive.bytes)
        .await
        .with_context(|| format!("Failed to write archive {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        size_bytes = archive.bytes.len(),
        rows = archive.row_count,
        "Export archive written"
    );

    Ok(path)
}
