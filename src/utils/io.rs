//! IO Utilities for reading and writing documents

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use tracing::{debug, instrument};

use crate::error::Result;

/// Reads the entire contents of a file into a byte vector.
#[instrument]
pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Writes a byte slice to a file, creating parent directories and
/// overwriting any existing file.
#[instrument(skip(data))]
pub async fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    ensure_parent_dir(path).await?;
    fs::write(path, data).await?;
    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Ensures parent directory exists for a file path.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

/// `<dir>/<input stem>_<millis>.pdf`, where `dir` defaults to the input's
/// own directory.
pub fn timestamped_output_path(input: &Path, output_dir: Option<&Path>, millis: i64) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "form".to_string());

    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    dir.join(format!("{}_{}.pdf", stem, millis))
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
