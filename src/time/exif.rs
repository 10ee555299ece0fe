//! EXIF date extraction for photos

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// EXIF tags to try for the capture date, in priority order
const DATE_TAGS: &[Tag] = &[
    Tag::DateTimeOriginal, // when the picture was taken
    Tag::DateTime,         // fallback: file change date/time
];

/// Fixed EXIF datetime pattern
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Extract the capture time from a photo's EXIF metadata
pub fn extract_exif_time(path: &Path) -> Result<NaiveDateTime> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| Error::ExifRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for tag in DATE_TAGS {
        // Read the raw ASCII bytes rather than display_value(), which
        // re-renders DateTime tags in dashed form the parser rejects.
        if let Some(field) = exif.get_field(*tag, In::PRIMARY)
            && let exif::Value::Ascii(ref vec) = field.value
            && let Some(bytes) = vec.first()
            && let Some(datetime) = parse_exif_datetime(&String::from_utf8_lossy(bytes))
        {
            trace!(?path, ?tag, "found EXIF date");
            return Ok(datetime);
        }
    }

    Err(Error::ExifRead {
        path: path.to_path_buf(),
        message: "no usable date tag in EXIF data".to_string(),
    })
}

/// Parse the EXIF datetime string format: "YYYY:MM:DD HH:MM:SS"
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    // display_value may wrap the string in quotes
    let s = s.trim().trim_matches('"');
    NaiveDateTime::parse_from_str(s, EXIF_DATETIME_FORMAT).ok()
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_exif_datetime() {
        let dt = parse_exif_datetime("2023:06:15 14:30:00").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);

        // Quoted form
        let dt = parse_exif_datetime("\"2023:06:15 14:30:00\"").unwrap();
        assert_eq!(dt.year(), 2023);

        // Anything outside the fixed pattern is rejected
        assert!(parse_exif_datetime("2023-06-15 14:30:00").is_none());
        assert!(parse_exif_datetime("not a date").is_none());
        assert!(parse_exif_datetime("").is_none());
    }

    #[test]
    fn test_extract_datetime_original_from_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, testdata::jpeg_with_datetime_original()).unwrap();

        let dt = extract_exif_time(&path).unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_extract_from_non_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_a_photo.jpg");
        std::fs::write(&path, b"plain text").unwrap();
        assert!(extract_exif_time(&path).is_err());
    }
}
