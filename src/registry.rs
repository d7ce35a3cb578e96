//! Handler registry and fan-out dispatch.
//!
//! Maps each channel to an ordered handler list and dispatches one event
//! to every interested handler with per-handler failure isolation: one
//! spawned task per handler, never one try/catch around the whole loop.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::{Channel, WatchEvent};
use crate::handler::SharedHandler;

/// Channel-to-handlers map shared between the watcher facade and its
/// event pump. Registration order is invocation (spawn) order.
#[derive(Default)]
pub(crate) struct HandlerRegistry {
    channels: RwLock<HashMap<Channel, Vec<SharedHandler>>>,
}

impl HandlerRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a handler to a channel's list.
    pub(crate) fn add(&self, channel: Channel, handler: SharedHandler) {
        self.channels.write().entry(channel).or_default().push(handler);
    }

    /// Remove every registration of `handler` on `channel`, matching by
    /// `Arc` identity. Silent no-op when absent.
    pub(crate) fn remove(&self, channel: Channel, handler: &SharedHandler) {
        let mut channels = self.channels.write();
        if let Some(handlers) = channels.get_mut(&channel) {
            handlers.retain(|h| !Arc::ptr_eq(h, handler));
            if handlers.is_empty() {
                channels.remove(&channel);
            }
        }
    }

    /// Stable snapshot for one event: the specific-category handlers in
    /// registration order, then the `All` handlers. Registrations that
    /// land after the snapshot see only later events; removals cannot
    /// retract a delivery already in flight.
    pub(crate) fn snapshot(&self, channel: Channel) -> Vec<SharedHandler> {
        let channels = self.channels.read();
        let mut handlers = Vec::new();
        if let Some(list) = channels.get(&channel) {
            handlers.extend(list.iter().cloned());
        }
        if channel != Channel::All {
            if let Some(list) = channels.get(&Channel::All) {
                handlers.extend(list.iter().cloned());
            }
        }
        handlers
    }

    /// Fan one event out to its snapshot, one detached task per handler.
    ///
    /// A handler returning `Err` is logged and discarded; a panicking
    /// handler is absorbed by its task boundary. Either way every other
    /// handler still runs. Failures are terminal for that one delivery,
    /// never retried.
    pub(crate) fn dispatch(&self, event: &WatchEvent) {
        let handlers = self.snapshot(Channel::Category(event.category));
        if handlers.is_empty() {
            crate::debug_event!("dispatch", "no handlers", "{}", event.category);
            return;
        }

        crate::debug_event!(
            "dispatch",
            event.category.as_str(),
            "{} -> {} handler(s)",
            event.path.display(),
            handlers.len()
        );

        for handler in handlers {
            let event = event.clone();
            tokio::spawn(async move {
                if let Err(e) = handler.handle(event.clone()).await {
                    tracing::warn!(
                        "[dispatch] handler error for {} ({}): {e}",
                        event.path.display(),
                        event.category
                    );
                }
            });
        }
    }

    #[cfg(test)]
    fn handler_count(&self, channel: Channel) -> usize {
        self.channels
            .read()
            .get(&channel)
            .map_or(0, |handlers| handlers.len())
    }
}
