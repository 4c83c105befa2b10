use std::path::{Path, PathBuf};

use anyhow::Context;
use csvnest_core::{AppError, ErrorMetadata};

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Turn command-line inputs into file paths. Directories are expanded one
/// level deep (sub-directories are skipped) and their entries sorted by name;
/// plain paths are passed through untouched, in the order given.
pub async fn expand_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();

    for input in inputs {
        let is_dir = tokio::fs::metadata(input)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if !is_dir {
            out.push(input.clone());
            continue;
        }

        out.extend(list_directory(input).await?);
    }

    Ok(out)
}

async fn list_directory(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let file_type = entry.file_type().await?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}

/// Convert a domain error into the message shown to the user.
pub fn user_error(err: AppError) -> anyhow::Error {
    tracing::debug!(error_code = err.error_code(), error = %err, "Command failed");

    match err.suggested_action() {
        Some(action) => anyhow::anyhow!("{} ({})", err.client_message(), action),
        None => anyhow::anyhow!("{}", err.client_message()),
    }
}
