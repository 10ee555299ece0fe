//! Batch organizer
//!
//! Drives one organization run: enumerates eligible media files under the
//! source root, resolves each file's date, plans a collision-free destination
//! and transfers the file. A single bad file never aborts the batch; the
//! cancellation flag is polled between files.

use crate::config::{MediaKind, OrganizationRequest, TransferMode};
use crate::error::{Error, Result};
use crate::i18n::Strings;
use crate::plan::{plan_directory, plan_filename};
use crate::progress::{CancelToken, ProgressSink, ProgressSnapshot};
use crate::time::{DateSource, resolve_date};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Outcome of a single file within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// File was transferred to its destination
    Transferred,
    /// File was skipped after a recoverable failure
    Skipped { reason: String },
}

/// Per-file record aggregated by the organizer
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Source file path
    pub source: PathBuf,
    /// Destination path (for transferred files)
    pub destination: Option<PathBuf>,
    /// Where the resolved date came from
    pub date_source: Option<DateSource>,
    /// Outcome for this file
    pub status: FileStatus,
}

/// Terminal state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// File list exhausted without cancellation
    Completed {
        processed: usize,
        verb: &'static str,
    },
    /// Cancellation flag observed between files; transfers already made stay
    Cancelled { processed: usize },
}

/// Final report of a run: terminal state plus per-file results
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub results: Vec<FileResult>,
}

/// Executes organization runs for a validated request
pub struct Organizer {
    request: OrganizationRequest,
}

impl Organizer {
    /// Create an organizer, rejecting invalid requests before any file is
    /// touched
    pub fn new(request: OrganizationRequest) -> Result<Self> {
        request.validate()?;
        Ok(Self { request })
    }

    /// Run the batch sequentially.
    ///
    /// Per-file failures are recorded and skipped; only configuration errors
    /// (caught in [`Organizer::new`]) are fatal, so the run itself cannot
    /// fail.
    pub fn run(&self, sink: &dyn ProgressSink, cancel: &CancelToken) -> RunReport {
        let language = self.request.language;
        let mode = self.request.transfer_mode();

        sink.update(ProgressSnapshot {
            processed: 0,
            total: 0,
            current_file: String::new(),
            message: Strings::scanning(language).to_string(),
        });

        let files = self.enumerate_files();
        let total = files.len();
        info!(total, source = %self.request.source.display(), "enumerated media files");

        // The full count is known and published before any transfer begins
        sink.update(ProgressSnapshot {
            processed: 0,
            total,
            current_file: String::new(),
            message: Strings::starting(language).to_string(),
        });

        let mut results = Vec::with_capacity(total);
        let mut processed = 0usize;

        for path in files {
            if cancel.is_cancelled() {
                info!(processed, total, "run cancelled");
                sink.update(ProgressSnapshot {
                    processed,
                    total,
                    current_file: String::new(),
                    message: Strings::cancelled(language).to_string(),
                });
                return RunReport {
                    outcome: RunOutcome::Cancelled { processed },
                    results,
                };
            }

            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();

            match self.organize_one(&path) {
                Ok((destination, date_source)) => {
                    processed += 1;
                    if date_source == DateSource::Fallback {
                        warn!(
                            source = %path.display(),
                            "no capture date available, filed under the current date"
                        );
                    }
                    debug!(
                        source = %path.display(),
                        destination = %destination.display(),
                        ?date_source,
                        "transferred file"
                    );
                    results.push(FileResult {
                        source: path,
                        destination: Some(destination),
                        date_source: Some(date_source),
                        status: FileStatus::Transferred,
                    });
                    sink.update(ProgressSnapshot {
                        processed,
                        total,
                        current_file: filename.clone(),
                        message: Strings::processing(language, &filename),
                    });
                }
                Err(e) => {
                    warn!(source = %path.display(), error = %e, "skipping file");
                    results.push(FileResult {
                        source: path,
                        destination: None,
                        date_source: None,
                        status: FileStatus::Skipped {
                            reason: e.to_string(),
                        },
                    });
                }
            }
        }

        info!(processed, total, verb = mode.verb(), "run completed");
        sink.update(ProgressSnapshot {
            processed,
            total,
            current_file: String::new(),
            message: Strings::completed(language, processed, mode),
        });

        RunReport {
            outcome: RunOutcome::Completed {
                processed,
                verb: mode.verb(),
            },
            results,
        }
    }

    /// Collect eligible files under the source root in directory traversal
    /// order. Symlinks, hidden entries and non-matching extensions are
    /// silently skipped.
    fn enumerate_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.request.source)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(kind) = MediaKind::from_path(entry.path())
                && self.request.filter.matches(kind)
            {
                files.push(entry.into_path());
            }
        }

        files
    }

    /// Resolve, plan and transfer a single file
    fn organize_one(&self, path: &Path) -> Result<(PathBuf, DateSource)> {
        let kind = MediaKind::from_path(path)
            .ok_or_else(|| Error::InvalidFilename(path.to_path_buf()))?;
        let dest_root = self.request.destination_for(kind)?;

        let resolved = resolve_date(path, kind);
        let directory = plan_directory(dest_root, &resolved.timestamp, self.request.language)?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidFilename(path.to_path_buf()))?;
        let destination = plan_filename(&directory, filename)?;

        transfer_file(path, &destination, self.request.transfer_mode())?;
        Ok((destination, resolved.source))
    }
}

/// Entry point for one organization run
pub fn organize(
    request: OrganizationRequest,
    sink: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<RunReport> {
    Ok(Organizer::new(request)?.run(sink, cancel))
}

/// Hidden entries (dot-prefixed) are pruned from the walk; the source root
/// itself is exempt
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Transfer a file to its planned destination
fn transfer_file(source: &Path, dest: &Path, mode: TransferMode) -> Result<()> {
    match mode {
        TransferMode::Copy => {
            copy_file(source, dest)?;
            preserve_mtime(source, dest);
        }
        TransferMode::Move => {
            // Rename is cheap on the same filesystem; fall back to
            // copy + delete across filesystems
            if fs::rename(source, dest).is_err() {
                copy_file(source, dest)?;
                preserve_mtime(source, dest);
                fs::remove_file(source)?;
            }
        }
    }
    Ok(())
}

/// Copy file contents with buffered I/O
fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    let src_file = File::open(source)?;
    let dest_file = File::create(dest)?;

    let mut reader = BufReader::with_capacity(256 * 1024, src_file);
    let mut writer = BufWriter::with_capacity(256 * 1024, dest_file);

    let mut buffer = vec![0u8; 256 * 1024];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        writer.write_all(&buffer[..bytes_read])?;
    }

    writer.flush()?;
    Ok(())
}

/// Carry the source modification time over to the destination
fn preserve_mtime(source: &Path, dest: &Path) {
    if let Ok(metadata) = fs::metadata(source)
        && let Ok(mtime) = metadata.modified()
    {
        let _ = filetime::set_file_mtime(dest, filetime::FileTime::from_system_time(mtime));
    }
}
