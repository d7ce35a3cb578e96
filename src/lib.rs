//! Debounced workspace file-change watcher.
//!
//! Monitors one or more labeled directory trees, coalesces bursts of
//! raw filesystem notifications into single events per path, classifies
//! each event by the root it happened under, and fans it out to
//! independently-failing handlers.
//!
//! # Architecture
//!
//! ```text
//! notify backend
//!      |  raw events (bridged into tokio)
//!      v
//! Debouncer (per-path windows, swept on a tick)
//!      |  one path per elapsed window
//!      v
//! categorize (root table -> EventCategory)
//!      |  WatchEvent { category, path }
//!      v
//! HandlerRegistry (category channel + "all" channel)
//!      |  one spawned task per handler, failures isolated
//!      v
//! EventHandler observers
//! ```
//!
//! # Example
//!
//! ```no_run
//! use katawatch::{EventCategory, WatchOptions, handler_fn, workspace_watcher};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let watcher = workspace_watcher("/path/to/workspace", WatchOptions::default());
//! watcher.on(EventCategory::ProblemChanged, handler_fn(|event| async move {
//!     println!("problem changed: {}", event.path.display());
//!     Ok(())
//! }));
//! watcher.start().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod debouncer;
pub mod error;
pub mod event;
pub mod handler;
pub mod logging;
mod registry;
pub mod roots;
pub mod watcher;
pub mod workspace;

pub use config::WatchOptions;
pub use debouncer::Debouncer;
pub use error::WatchError;
pub use event::{Channel, EventCategory, WatchEvent};
pub use handler::{EventHandler, SharedHandler, handler_fn};
pub use roots::{WatchedRoot, categorize};
pub use watcher::FileWatcher;
pub use workspace::{PROBLEMS_DIR, TEMPLATES_DIR, workspace_watcher};
