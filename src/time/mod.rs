//! Date resolution for media files
//!
//! Resolves the authoritative timestamp of a file through a fallback chain:
//! EXIF metadata (photos only), file system modification time, current time.
//! Resolution never fails; each step's failure demotes to the next.

pub mod exif;

use crate::config::MediaKind;
use crate::error::Result;
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Where a resolved timestamp came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// EXIF capture date
    Exif,
    /// File system modification time
    FileSystem,
    /// Current wall-clock time; the file may be misfiled, so this is
    /// surfaced distinctly in diagnostics and per-file results
    Fallback,
}

/// A resolved timestamp together with its provenance
#[derive(Debug, Clone, Copy)]
pub struct ResolvedDate {
    pub timestamp: NaiveDateTime,
    pub source: DateSource,
}

/// Resolve the capture date of a media file.
///
/// Photos are tried for EXIF dates first; everything falls back to the file
/// modification time, and finally to the current time.
pub fn resolve_date(path: &Path, kind: MediaKind) -> ResolvedDate {
    if kind == MediaKind::Photo {
        match exif::extract_exif_time(path) {
            Ok(timestamp) => {
                return ResolvedDate {
                    timestamp,
                    source: DateSource::Exif,
                };
            }
            Err(e) => {
                debug!(?path, error = %e, "no EXIF date, trying modification time");
            }
        }
    }

    match modification_time(path) {
        Ok(timestamp) => ResolvedDate {
            timestamp,
            source: DateSource::FileSystem,
        },
        Err(e) => {
            warn!(?path, error = %e, "no usable date source, falling back to current time");
            ResolvedDate {
                timestamp: Local::now().naive_local(),
                source: DateSource::Fallback,
            }
        }
    }
}

/// File system modification time as local naive time
fn modification_time(path: &Path) -> Result<NaiveDateTime> {
    let metadata = fs::metadata(path)?;
    let modified = metadata.modified()?;
    let datetime: DateTime<Local> = modified.into();
    Ok(datetime.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use filetime::FileTime;

    #[test]
    fn test_resolve_uses_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"video bytes").unwrap();
        // 2022-06-15 12:00:00 UTC
        filetime::set_file_mtime(&path, FileTime::from_unix_time(1655294400, 0)).unwrap();

        let resolved = resolve_date(&path, MediaKind::Video);
        assert_eq!(resolved.source, DateSource::FileSystem);
        assert_eq!(resolved.timestamp.year(), 2022);
        assert_eq!(resolved.timestamp.month(), 6);
    }

    #[test]
    fn test_exif_date_wins_over_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, exif::testdata::jpeg_with_datetime_original()).unwrap();
        // Conflicting mtime: 2001-01-01 12:00:00 UTC
        filetime::set_file_mtime(&path, FileTime::from_unix_time(978350400, 0)).unwrap();

        let resolved = resolve_date(&path, MediaKind::Photo);
        assert_eq!(resolved.source, DateSource::Exif);
        assert_eq!(resolved.timestamp.year(), 2023);
        assert_eq!(resolved.timestamp.month(), 6);
        assert_eq!(resolved.timestamp.day(), 15);
    }

    #[test]
    fn test_photo_without_exif_uses_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        let resolved = resolve_date(&path, MediaKind::Photo);
        assert_eq!(resolved.source, DateSource::FileSystem);
    }

    #[test]
    fn test_missing_file_falls_back_to_now() {
        let resolved = resolve_date(Path::new("/nonexistent/ghost.jpg"), MediaKind::Photo);
        assert_eq!(resolved.source, DateSource::Fallback);
        // The fallback is exhaustive: a timestamp is always produced
        assert!(resolved.timestamp.year() >= 2024);
    }
}
