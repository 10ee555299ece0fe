//! Request configuration for an organization run

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized photo extensions (matched case-insensitively)
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Recognized video extensions (matched case-insensitively)
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

/// Kind of a media file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    /// Classify a path by its extension, `None` for unrecognized extensions
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();
        if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Photo)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// Which media kinds a run should pick up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileTypeFilter {
    /// Photos and videos
    #[default]
    All,
    /// Photos only
    Photos,
    /// Videos only
    Videos,
}

impl FileTypeFilter {
    /// Whether a media kind is included by this filter
    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            FileTypeFilter::All => true,
            FileTypeFilter::Photos => kind == MediaKind::Photo,
            FileTypeFilter::Videos => kind == MediaKind::Video,
        }
    }
}

/// Display language for destination folder names and status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Swedish,
}

/// How files are transferred to their destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// Duplicate bytes, keep the source
    Copy,
    /// Remove the source after a successful transfer
    Move,
}

impl TransferMode {
    /// Past-tense verb used in the final run outcome
    pub fn verb(&self) -> &'static str {
        match self {
            TransferMode::Copy => "copied",
            TransferMode::Move => "moved",
        }
    }
}

/// Immutable configuration for one organization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationRequest {
    /// Source directory to scan recursively
    pub source: PathBuf,

    /// Destination root for photos (and videos, unless separated)
    pub photo_dest: Option<PathBuf>,

    /// Destination root for videos when separation is requested
    pub video_dest: Option<PathBuf>,

    /// Route videos to their own destination root
    #[serde(default)]
    pub separate_videos: bool,

    /// Which media kinds to organize
    #[serde(default)]
    pub filter: FileTypeFilter,

    /// Language for destination folder names and status messages
    #[serde(default)]
    pub language: Language,

    /// Remove source files after a successful transfer
    #[serde(default)]
    pub delete_source: bool,
}

impl OrganizationRequest {
    /// Validate that every destination required by the active filter is set.
    /// Called before a run begins; a failing request never touches any file.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(Error::Config("source folder is required".into()));
        }
        if self.filter != FileTypeFilter::Videos && self.photo_dest.is_none() {
            return Err(Error::Config("photo destination folder is required".into()));
        }
        // A photos-only run processes no videos, so separation is moot
        if self.filter != FileTypeFilter::Photos
            && self.videos_separated()
            && self.video_dest.is_none()
        {
            return Err(Error::Config("video destination folder is required".into()));
        }
        Ok(())
    }

    /// Whether videos go to their own destination root.
    /// A videos-only run always uses the video destination.
    pub fn videos_separated(&self) -> bool {
        self.separate_videos || self.filter == FileTypeFilter::Videos
    }

    /// Destination root for a media kind
    pub fn destination_for(&self, kind: MediaKind) -> Result<&Path> {
        let dest = match kind {
            MediaKind::Video if self.videos_separated() => self.video_dest.as_deref(),
            _ => self.photo_dest.as_deref(),
        };
        dest.ok_or_else(|| Error::Config(format!("no destination configured for {kind:?}")))
    }

    /// Transfer mode derived from the delete-after-transfer flag
    pub fn transfer_mode(&self) -> TransferMode {
        if self.delete_source {
            TransferMode::Move
        } else {
            TransferMode::Copy
        }
    }

    /// Load a request from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::RequestRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| Error::RequestParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
