//! Core file watcher: lifecycle, OS notification plumbing, event pump.
//!
//! The watcher is the sole point of contact between `notify` and the
//! rest of the pipeline. Raw events land in the per-path debouncer; a
//! periodic sweep categorizes expired paths and fans them out through
//! the handler registry.

use std::path::PathBuf;
use std::sync::Arc;

use notify::{Event, EventKind, RecursiveMode, Watcher};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tokio_util::sync::CancellationToken;

use crate::config::WatchOptions;
use crate::debouncer::Debouncer;
use crate::error::WatchError;
use crate::event::{Channel, WatchEvent};
use crate::handler::SharedHandler;
use crate::registry::HandlerRegistry;
use crate::roots::{WatchedRoot, categorize};

/// Cadence at which expired debounce windows are swept.
const SWEEP_TICK_MS: u64 = 100;

/// State held only while running. Dropping the pump drops the notify
/// backend, which releases the OS subscriptions.
struct Running {
    cancel: CancellationToken,
    pump: tokio::task::JoinHandle<()>,
}

/// Debounced, categorizing file watcher over a set of labeled roots.
///
/// Constructed stopped; no filesystem resources are held until
/// [`start`](Self::start). Handlers may be registered and removed in
/// any state and take effect immediately, including for debounce
/// windows already in flight.
pub struct FileWatcher {
    roots: Vec<WatchedRoot>,
    options: WatchOptions,
    registry: Arc<HandlerRegistry>,
    running: Mutex<Option<Running>>,
}

impl FileWatcher {
    /// Create a stopped watcher over one or more labeled roots.
    pub fn new(roots: impl IntoIterator<Item = WatchedRoot>, options: WatchOptions) -> Self {
        Self {
            roots: roots.into_iter().collect(),
            options,
            registry: Arc::new(HandlerRegistry::new()),
            running: Mutex::new(None),
        }
    }

    /// Begin listening for OS change notifications on all roots.
    ///
    /// Fails with [`WatchError::AlreadyRunning`] while running (state
    /// untouched) or [`WatchError::Init`] when the notify backend cannot
    /// be created. A root that cannot be subscribed is logged at warn
    /// level and skipped; the remaining roots keep working.
    pub async fn start(&self) -> Result<(), WatchError> {
        let mut slot = self.running.lock();
        if slot.is_some() {
            return Err(WatchError::AlreadyRunning);
        }

        let (tx, event_rx) = mpsc::channel(100);
        let mut backend = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.blocking_send(res);
        })?;

        let mode = if self.options.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };

        let mut subscribed = Vec::with_capacity(self.roots.len());
        for root in &self.roots {
            let root = root.canonicalized();
            match backend.watch(root.path(), mode) {
                Ok(()) => {
                    crate::debug_event!("watcher", "watching", "{}", root.path().display());
                    subscribed.push(root);
                }
                Err(e) => {
                    tracing::warn!("[watcher] failed to watch {}: {e}", root.path().display());
                }
            }
        }

        if subscribed.is_empty() {
            tracing::warn!("[watcher] no roots could be watched - nothing will be reported");
        }

        let cancel = CancellationToken::new();
        let pump = Pump {
            roots: subscribed,
            registry: self.registry.clone(),
            debouncer: Debouncer::new(self.options.debounce_ms),
            event_rx,
            _backend: backend,
        };
        let pump = tokio::spawn(pump.run(cancel.clone()));

        *slot = Some(Running { cancel, pump });
        crate::log_event!("watcher", "started", "{} root(s)", self.roots.len());
        Ok(())
    }

    /// Stop listening. Idempotent; a silent no-op on a stopped or
    /// never-started watcher.
    ///
    /// Cancels the pump and awaits its exit before returning, so no new
    /// event is dispatched afterwards. Pending debounce windows die
    /// un-fired. Handlers already dispatched keep running to completion.
    pub async fn stop(&self) {
        let Some(running) = self.running.lock().take() else {
            return;
        };
        running.cancel.cancel();
        if let Err(e) = running.pump.await {
            tracing::warn!("[watcher] event pump exited abnormally: {e}");
        }
        crate::log_event!("watcher", "stopped");
    }

    /// Whether the watcher currently holds OS subscriptions.
    pub fn is_running(&self) -> bool {
        self.running.lock().is_some()
    }

    /// Register a handler on a category channel or [`Channel::All`].
    pub fn on(&self, channel: impl Into<Channel>, handler: SharedHandler) {
        self.registry.add(channel.into(), handler);
    }

    /// Remove a previously registered handler by `Arc` identity.
    /// Removing an unregistered handler is a silent no-op.
    pub fn off(&self, channel: impl Into<Channel>, handler: &SharedHandler) {
        self.registry.remove(channel.into(), handler);
    }

    /// The roots this watcher was constructed over.
    pub fn roots(&self) -> &[WatchedRoot] {
        &self.roots
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        // An abandoned running watcher must not leak its pump task.
        // stop() remains the deterministic shutdown path.
        if let Some(running) = self.running.get_mut().take() {
            running.cancel.cancel();
        }
    }
}

/// Background task driving one running watcher: drains raw notify
/// events, sweeps the debouncer, dispatches expired paths.
struct Pump {
    roots: Vec<WatchedRoot>,
    registry: Arc<HandlerRegistry>,
    debouncer: Debouncer,
    event_rx: mpsc::Receiver<notify::Result<Event>>,
    /// Owned here so the OS subscription lives exactly as long as the pump.
    _backend: notify::RecommendedWatcher,
}

impl Pump {
    async fn run(mut self, cancel: CancellationToken) {
        loop {
            let sweep = sleep(Duration::from_millis(SWEEP_TICK_MS));
            tokio::pin!(sweep);

            tokio::select! {
                _ = cancel.cancelled() => {
                    self.debouncer.clear();
                    break;
                }

                Some(res) = self.event_rx.recv() => {
                    match res {
                        Ok(event) => self.absorb(event),
                        Err(e) => {
                            // Backend errors never terminate the pump;
                            // still-valid roots keep reporting.
                            tracing::error!("[watcher] file watch error: {e}");
                        }
                    }
                }

                _ = &mut sweep => {
                    for path in self.debouncer.take_ready() {
                        self.deliver(path);
                    }
                }
            }
        }
    }

    /// Feed one raw notify event into the debouncer.
    fn absorb(&mut self, event: Event) {
        if !is_change(&event.kind) {
            return;
        }
        for path in event.paths {
            self.debouncer.record(path);
        }
    }

    /// Categorize an expired path and fan it out.
    fn deliver(&self, path: PathBuf) {
        let Some(category) = categorize(&path, &self.roots) else {
            crate::debug_event!("watcher", "unmatched", "{}", path.display());
            return;
        };
        self.registry.dispatch(&WatchEvent { category, path });
    }
}

/// Pure reads (Access) and backend chatter (Other) are not changes.
fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}
