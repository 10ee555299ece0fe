//! Destination path planning
//!
//! Computes the target directory for a timestamp and a collision-free
//! filename within it. The filename probe is check-then-use: it is not
//! atomic against concurrent writers of the destination tree, which is
//! acceptable for this single-writer design.

use crate::config::Language;
use crate::error::{Error, Result};
use crate::months::localized_month;
use chrono::{Datelike, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound for the collision suffix probe
const MAX_SUFFIX: u32 = 10_000;

/// Compute and create the destination directory for a timestamp:
/// `{dest_root}/{year}/{localized month}`.
///
/// Creation is recursive and idempotent; an already existing directory is
/// not an error.
pub fn plan_directory(
    dest_root: &Path,
    timestamp: &NaiveDateTime,
    language: Language,
) -> Result<PathBuf> {
    let dir = dest_root
        .join(timestamp.year().to_string())
        .join(localized_month(timestamp.month(), language));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Pick a destination path inside `directory` that does not already exist.
///
/// Returns `directory/original` when free, otherwise `{stem}_{n}{ext}` for
/// the smallest `n >= 1` whose path is free.
pub fn plan_filename(directory: &Path, original: &str) -> Result<PathBuf> {
    let candidate = directory.join(original);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let original_path = Path::new(original);
    let stem = original_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidFilename(original_path.to_path_buf()))?;
    let extension = original_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    for n in 1..MAX_SUFFIX {
        let candidate = directory.join(format!("{stem}_{n}{extension}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(Error::FilenameConflict(candidate))
}
