// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostic reports to disk.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Serialization(serde_json::Error),
    /// No data directory could be resolved.
    NoDirectory,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
            Self::NoDirectory => write!(f, "no data directory available"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::NoDirectory => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Generates a default filename for diagnostic reports.
///
/// Format: `feline_fascination_diagnostics_YYYYMMDD_HHMMSS.json`, local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "feline_fascination_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` to a temporary sibling file, then renames it over `path`.
///
/// A crash mid-write never leaves a truncated report behind.
///
/// # Errors
///
/// Returns the underlying I/O error; the temporary file is removed on failure.
pub async fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, content).await?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    Ok(())
}

/// Writes an already-serialized report into `dir` under a timestamped name.
///
/// # Errors
///
/// Returns `ExportError::Io` if the directory cannot be created or the file
/// cannot be written.
pub async fn export_report(dir: PathBuf, json: String) -> Result<PathBuf, ExportError> {
    tokio::fs::create_dir_all(&dir).await?;
    let path = dir.join(generate_default_filename());
    write_atomic(&path, &json).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_filename_has_expected_shape() {
        let name = generate_default_filename();
        assert!(name.starts_with("feline_fascination_diagnostics_"));
        assert!(name.ends_with(".json"));
        // prefix + YYYYMMDD_HHMMSS + .json
        assert_eq!(name.len(), "feline_fascination_diagnostics_".len() + 15 + 5);
    }

    #[tokio::test]
    async fn write_atomic_leaves_no_temp_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");

        write_atomic(&path, "{}").await.expect("write");

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn export_report_creates_missing_directory() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("nested").join("diagnostics");

        let path = export_report(target.clone(), "{\"events\":[]}".to_string())
            .await
            .expect("export");

        assert!(path.starts_with(&target));
        assert!(path.exists());
    }

    #[test]
    fn display_mentions_cause() {
        let err = ExportError::NoDirectory;
        assert_eq!(err.to_string(), "no data directory available");
    }
}
