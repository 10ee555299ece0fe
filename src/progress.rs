//! Progress reporting and cancellation primitives

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

/// A point-in-time view of a running batch
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    /// Files transferred so far
    pub processed: usize,
    /// Files enumerated for this run
    pub total: usize,
    /// Name of the file the snapshot refers to, empty between files
    pub current_file: String,
    /// Localized status text
    pub message: String,
}

/// Receives progress snapshots from the worker.
///
/// Called synchronously between files; implementations must not block.
pub trait ProgressSink: Send {
    fn update(&self, snapshot: ProgressSnapshot);
}

/// Channel-backed sink for delivering snapshots to another thread
pub struct ChannelSink {
    tx: Sender<ProgressSnapshot>,
}

impl ChannelSink {
    pub fn new(tx: Sender<ProgressSnapshot>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn update(&self, snapshot: ProgressSnapshot) {
        // A disconnected receiver is not the worker's problem
        let _ = self.tx.send(snapshot);
    }
}

/// Sink that drops all snapshots
pub struct NullSink;

impl ProgressSink for NullSink {
    fn update(&self, _snapshot: ProgressSnapshot) {}
}

/// Cooperative cancellation flag, polled by the worker between files.
///
/// Setting it is idempotent; clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the run
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());

        clone.cancel();
        assert!(token.is_cancelled());

        // Idempotent
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_channel_sink_forwards_snapshots() {
        let (tx, rx) = mpsc::channel();
        let sink = ChannelSink::new(tx);

        sink.update(ProgressSnapshot {
            processed: 1,
            total: 3,
            current_file: "a.jpg".into(),
            message: "Processing: a.jpg".into(),
        });

        let snapshot = rx.recv().unwrap();
        assert_eq!(snapshot.processed, 1);
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.current_file, "a.jpg");
    }

    #[test]
    fn test_channel_sink_ignores_disconnected_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let sink = ChannelSink::new(tx);
        sink.update(ProgressSnapshot {
            processed: 0,
            total: 0,
            current_file: String::new(),
            message: String::new(),
        });
    }
}
