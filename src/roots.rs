//! Watched roots and path categorization.
//!
//! The root-to-category association is plain data passed at construction,
//! so the core watcher stays agnostic of any particular workspace layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::event::EventCategory;

/// A directory tree the watcher subscribes to, labeled with the category
/// its events carry. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedRoot {
    path: PathBuf,
    category: EventCategory,
}

impl WatchedRoot {
    pub fn new(path: impl Into<PathBuf>, category: EventCategory) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// Resolve the root to its canonical form so prefix matching agrees
    /// with the absolute paths the OS reports (macOS reports `/tmp` as
    /// `/private/tmp`). Falls back to the declared path when the root
    /// does not resolve.
    pub(crate) fn canonicalized(&self) -> Self {
        match self.path.canonicalize() {
            Ok(path) => Self {
                path,
                category: self.category,
            },
            Err(_) => self.clone(),
        }
    }
}

/// Map a changed path to the category of the first root containing it.
///
/// Pure and synchronous. Returns `None` for paths outside every root;
/// such paths are never reported to handlers.
pub fn categorize(path: &Path, roots: &[WatchedRoot]) -> Option<EventCategory> {
    roots
        .iter()
        .find(|root| path.starts_with(&root.path))
        .map(|root| root.category)
}
