//! Photo & Video Organizer - command line entry point
//!
//! Runs one organization batch on a worker thread while the main thread
//! renders progress snapshots received over a channel.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use photo_organizer::{
    CancelToken, ChannelSink, Cli, FileStatus, OrganizationRequest, Organizer, RunOutcome,
    RunReport,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Styled terminal output helpers
mod output {
    use crossterm::{
        ExecutableCommand,
        cursor::MoveToColumn,
        style::{Color, Print, Stylize, style},
        terminal::{Clear, ClearType},
    };
    use photo_organizer::ProgressSnapshot;
    use std::io::stdout;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const HINT: Color = Color::DarkGrey;

    pub fn print_separator() {
        let _ = stdout().execute(Print(format!("{}\n", "─".repeat(60))));
    }

    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }

    /// Progress line, rewritten in place
    pub fn print_progress(snapshot: &ProgressSnapshot) {
        let counter = if snapshot.total > 0 {
            format!("[{}/{}] ", snapshot.processed, snapshot.total)
        } else {
            String::new()
        };
        let mut out = stdout();
        let _ = out.execute(MoveToColumn(0));
        let _ = out.execute(Clear(ClearType::CurrentLine));
        let _ = out.execute(Print(format!("{}{}", counter, snapshot.message)));
    }

    pub fn print_stat(key: &str, value: &str, color: Color) {
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(style(key).with(HINT)));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(style(value).with(color).bold()));
        let _ = stdout().execute(Print("\n"));
    }

    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(ERROR).bold()));
        let _ = stdout().execute(Print(format!("{msg}\n")));
    }

    pub fn print_key_value(key: &str, value: &str) {
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(style(key).italic()));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(style(value).with(ERROR)));
        let _ = stdout().execute(Print("\n"));
    }

    pub fn print_log_path(path: &str) {
        let _ = stdout().execute(Print(style("  Log file: ").with(HINT)));
        let _ = stdout().execute(Print(format!("{path}\n")));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exe_dir = get_executable_dir()?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = exe_dir.join("Log").join(format!("Organize_{timestamp}.log"));

    let _guard = setup_logging(&cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Photo Organizer starting"
    );

    let request = load_request(&cli)?;
    if cli.verbose {
        info!(?request, "Request loaded");
    }

    // Invalid requests fail here, before any file is touched
    let organizer = Organizer::new(request)?;

    let (tx, rx) = mpsc::channel();
    let sink = ChannelSink::new(tx);
    let cancel = CancelToken::new();

    let handle = thread::spawn(move || organizer.run(&sink, &cancel));

    // Render progress until the worker drops its sender
    for snapshot in rx {
        output::print_progress(&snapshot);
    }
    output::print_blank();

    let report = match handle.join() {
        Ok(report) => report,
        Err(_) => anyhow::bail!("worker thread panicked"),
    };

    print_summary(&report, &log_path);
    info!(log_file = %log_path.display(), "Run finished. Log saved to");

    Ok(())
}

/// Print the end-of-run summary with per-file failures
fn print_summary(report: &RunReport, log_path: &Path) {
    use output::*;

    let skipped: Vec<_> = report
        .results
        .iter()
        .filter(|r| matches!(r.status, FileStatus::Skipped { .. }))
        .collect();

    print_separator();
    match report.outcome {
        RunOutcome::Completed { processed, verb } => {
            print_stat("Files processed", &processed.to_string(), SUCCESS);
            print_stat("Transfer", verb, SUCCESS);
        }
        RunOutcome::Cancelled { processed } => {
            print_stat("Files processed", &processed.to_string(), WARNING);
            print_stat("Run", "cancelled", WARNING);
        }
    }
    print_stat("Skipped", &skipped.len().to_string(), WARNING);

    if !skipped.is_empty() {
        print_separator();
        print_error("Skipped files:");
        for result in &skipped {
            let reason = match &result.status {
                FileStatus::Skipped { reason } => reason.as_str(),
                FileStatus::Transferred => unreachable!(),
            };
            print_key_value(&result.source.display().to_string(), reason);
        }
    }

    print_separator();
    print_log_path(&log_path.display().to_string());
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Build the request from a file, CLI arguments, or both
fn load_request(cli: &Cli) -> Result<OrganizationRequest> {
    let request = if let Some(ref config_path) = cli.config {
        info!(request_file = %config_path.display(), "Loading request from file");
        let file_request = OrganizationRequest::load_from_file(config_path)?;
        cli.merge_with_request(file_request)
    } else {
        cli.to_request()
    };
    Ok(request)
}

/// Setup logging: non-blocking file writer plus stderr
fn setup_logging(cli: &Cli, log_path: &Path) -> Result<Option<WorkerGuard>> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(Some(guard))
}
