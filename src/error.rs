//! Error types for the watcher lifecycle.

use thiserror::Error;

/// Errors from watcher operations.
///
/// Handler failures are never surfaced here; the dispatcher absorbs them.
/// The only contract-breaking failure a caller can see is a double `start()`.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("watcher is already running")]
    AlreadyRunning,

    #[error("failed to initialize file watcher: {0}")]
    Init(#[from] notify::Error),
}
