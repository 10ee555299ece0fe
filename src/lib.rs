//! Photo & Video Organizer
//!
//! This library sorts media files into a year/month folder hierarchy based
//! on their capture dates:
//! - EXIF capture date extraction for photos, with file-time fallback
//! - Localized month folder names (English and Swedish)
//! - Collision-free destination naming with numeric suffixes
//! - Copy or move transfers with progress reporting and cancellation

pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod months;
pub mod organize;
pub mod plan;
pub mod progress;
pub mod time;

pub use cli::Cli;
pub use config::{FileTypeFilter, Language, MediaKind, OrganizationRequest, TransferMode};
pub use error::{Error, Result};
pub use organize::{FileResult, FileStatus, Organizer, RunOutcome, RunReport, organize};
pub use progress::{CancelToken, ChannelSink, NullSink, ProgressSink, ProgressSnapshot};
pub use time::{DateSource, ResolvedDate, resolve_date};
