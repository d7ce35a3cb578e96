//! Handler trait for observers of watch events.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::event::WatchEvent;

/// Trait for observers that react to debounced workspace changes.
///
/// Handlers run concurrently with respect to each other; an `Err` from
/// one delivery is logged by the dispatcher and never affects sibling
/// handlers or the watcher itself.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: WatchEvent) -> anyhow::Result<()>;
}

/// Shared handler reference. Removal (`off`) matches by `Arc` identity,
/// so keep the clone you registered with if you intend to remove it.
pub type SharedHandler = Arc<dyn EventHandler>;

// Closures register directly: synchronous work is just an async body
// with no awaits, so both forms go through the same seam.
#[async_trait]
impl<F, Fut> EventHandler for F
where
    F: Fn(WatchEvent) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    async fn handle(&self, event: WatchEvent) -> anyhow::Result<()> {
        (self)(event).await
    }
}

/// Wrap a closure as a [`SharedHandler`].
pub fn handler_fn<F, Fut>(f: F) -> SharedHandler
where
    F: Fn(WatchEvent) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(f)
}
