//! CLI argument parsing with clap

use crate::config::{FileTypeFilter, Language, OrganizationRequest};
use crate::i18n;
use clap::Parser;
use std::path::PathBuf;

/// Photo & Video Organizer
///
/// Sorts photos and videos into a Year/Month folder hierarchy based on
/// their capture dates, with localized month folder names.
#[derive(Parser, Debug)]
#[command(name = "photo-organizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a request file (TOML format)
    ///
    /// When specified, settings from the file are used as defaults.
    /// CLI arguments override file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Source folder to scan for media files
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Destination folder for photos (and videos, unless separated)
    #[arg(short, long)]
    pub photo_dest: Option<PathBuf>,

    /// Destination folder for videos; implies separation
    #[arg(long)]
    pub video_dest: Option<PathBuf>,

    /// Which media kinds to organize
    #[arg(short, long, value_enum)]
    pub filter: Option<FileTypeFilter>,

    /// Language for destination folder names (default: system locale)
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Remove source files after a successful transfer
    #[arg(long)]
    pub delete_source: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Merge CLI arguments over a request loaded from a file.
    /// CLI arguments take precedence.
    pub fn merge_with_request(&self, mut request: OrganizationRequest) -> OrganizationRequest {
        if let Some(ref source) = self.source {
            request.source = source.clone();
        }
        if let Some(ref photo_dest) = self.photo_dest {
            request.photo_dest = Some(photo_dest.clone());
        }
        if let Some(ref video_dest) = self.video_dest {
            request.video_dest = Some(video_dest.clone());
            request.separate_videos = true;
        }
        if let Some(filter) = self.filter {
            request.filter = filter;
        }
        if let Some(language) = self.language {
            request.language = language;
        }
        if self.delete_source {
            request.delete_source = true;
        }
        request
    }

    /// Build a request from CLI arguments alone
    pub fn to_request(&self) -> OrganizationRequest {
        OrganizationRequest {
            source: self.source.clone().unwrap_or_default(),
            photo_dest: self.photo_dest.clone(),
            video_dest: self.video_dest.clone(),
            separate_videos: self.video_dest.is_some(),
            filter: self.filter.unwrap_or_default(),
            language: self.language.unwrap_or_else(i18n::detect_language),
            delete_source: self.delete_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_request_file() {
        let cli = Cli::parse_from([
            "photo-organizer",
            "--source",
            "/cli/source",
            "--language",
            "swedish",
        ]);

        let file_request = OrganizationRequest {
            source: PathBuf::from("/file/source"),
            photo_dest: Some(PathBuf::from("/file/photos")),
            video_dest: None,
            separate_videos: false,
            filter: FileTypeFilter::Photos,
            language: Language::English,
            delete_source: true,
        };

        let merged = cli.merge_with_request(file_request);
        assert_eq!(merged.source, PathBuf::from("/cli/source"));
        assert_eq!(merged.language, Language::Swedish);
        // Unset CLI options keep the file's values
        assert_eq!(merged.photo_dest, Some(PathBuf::from("/file/photos")));
        assert_eq!(merged.filter, FileTypeFilter::Photos);
        assert!(merged.delete_source);
    }

    #[test]
    fn test_video_dest_implies_separation() {
        let cli = Cli::parse_from([
            "photo-organizer",
            "--source",
            "/in",
            "--photo-dest",
            "/photos",
            "--video-dest",
            "/videos",
        ]);
        let request = cli.to_request();
        assert!(request.separate_videos);
    }
}
