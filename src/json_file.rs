// Whole-file JSON array operations

use eyre::{Context, Result, eyre};
use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read a JSON array of records from `path`
///
/// Never fails: a missing file, empty content, an I/O error or invalid JSON
/// all yield an empty vec. Anything other than a missing or empty file is
/// logged as a warning.
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        debug!(file = ?path, "Backing file does not exist yet, starting empty");
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(file = ?path, error = ?e, "Failed to read backing file, starting empty");
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<T>>(&content) {
        Ok(records) => {
            debug!(file = ?path, count = records.len(), "Loaded records from backing file");
            records
        }
        Err(e) => {
            warn!(file = ?path, error = ?e, "Failed to parse backing file, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite `path` with `records` serialized as one JSON array
///
/// Writers serialize on an exclusive lock held on a sidecar `<file>.lock`
/// from before the `.tmp` file is opened until after it is renamed over the
/// target, so readers never see a half-written file.
pub fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create backing file directory")?;
    }

    let tmp_path = sibling_path(path, ".tmp")?;
    let lock_path = sibling_path(path, ".lock")?;
    let json = serde_json::to_string(records).context("Failed to serialize records")?;

    let lock = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(&lock_path)
        .context("Failed to open lock file")?;
    lock.lock_exclusive().context("Failed to acquire file lock")?;

    {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)
            .context("Failed to open temporary file for writing")?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }

    // Lock is released when `lock` is dropped
    drop(lock);

    debug!(file = ?path, count = records.len(), "Wrote records to backing file");
    Ok(())
}

fn sibling_path(path: &Path, suffix: &str) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| eyre!("Backing file path has no file name: {:?}", path))?;
    let mut sibling = name.to_os_string();
    sibling.push(suffix);
    Ok(path.with_file_name(sibling))
}
