//! Per-path debouncing of raw file change events.
//!
//! Debouncing collapses bursts of notifications for the same path
//! (editor auto-save, atomic-write rename dances) into a single event
//! once the path has been quiet for the configured window.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Debounces file change events by path.
///
/// Records change timestamps and returns paths that have been stable
/// for the configured duration. Distinct paths debounce independently;
/// a burst on one path never delays another.
#[derive(Debug)]
pub struct Debouncer {
    /// Pending windows: path -> last raw event timestamp.
    pending: HashMap<PathBuf, Instant>,
    /// How long a path must stay quiet before it is reported.
    window: Duration,
}

impl Debouncer {
    /// Create a new debouncer with the given window in milliseconds.
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            pending: HashMap::new(),
            window: Duration::from_millis(debounce_ms),
        }
    }

    /// Record a raw change event, resetting the window for this path.
    pub fn record(&mut self, path: PathBuf) {
        self.record_at(path, Instant::now());
    }

    /// Take all paths whose window has elapsed without a reset.
    ///
    /// Returned paths are removed from pending, so each burst yields
    /// at most one emission.
    pub fn take_ready(&mut self) -> Vec<PathBuf> {
        self.take_ready_at(Instant::now())
    }

    /// Drop a pending window without firing it.
    pub fn remove(&mut self, path: &PathBuf) {
        self.pending.remove(path);
    }

    /// Drop every pending window. Used on shutdown so nothing fires late.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Check if there are any pending windows.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Get the number of pending windows.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // Explicit-clock variants keep the tests deterministic.

    fn record_at(&mut self, path: PathBuf, now: Instant) {
        self.pending.insert(path, now);
    }

    fn take_ready_at(&mut self, now: Instant) -> Vec<PathBuf> {
        let mut ready = Vec::new();

        self.pending.retain(|path, last_change| {
            if now.duration_since(*last_change) >= self.window {
                ready.push(path.clone());
                false
            } else {
                true
            }
        });

        ready
    }
}
