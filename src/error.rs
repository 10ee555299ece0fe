//! Error types for the organizer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for organizer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the organizer
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read EXIF data from {path}: {message}")]
    ExifRead { path: PathBuf, message: String },

    #[error("Invalid filename: {0}")]
    InvalidFilename(PathBuf),

    #[error("Could not find a free destination name for {0}")]
    FilenameConflict(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read request file '{path}': {source}")]
    RequestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse request file '{path}': {source}")]
    RequestParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
