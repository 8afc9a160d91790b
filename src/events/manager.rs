use std::panic::{self, AssertUnwindSafe};

use crate::{
    events::types::{EventKind, LayerEvent},
    Result,
};

type EventCallback = Box<dyn Fn(&LayerEvent<'_>) -> Result<()>>;

/// Handle returned by [`EventManager::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    /// `None` listens to every kind
    kind: Option<EventKind>,
    callback: EventCallback,
}

/// Synchronous publish/subscribe for layer lifecycle events.
///
/// Listeners run immediately, in registration order. A listener that returns
/// an error or panics is logged and skipped; the rest still run.
#[derive(Default)]
pub struct EventManager {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one event kind
    pub fn on<F>(&mut self, kind: EventKind, callback: F) -> ListenerId
    where
        F: Fn(&LayerEvent<'_>) -> Result<()> + 'static,
    {
        self.register(Some(kind), Box::new(callback))
    }

    /// Register a listener for every event kind
    pub fn on_any<F>(&mut self, callback: F) -> ListenerId
    where
        F: Fn(&LayerEvent<'_>) -> Result<()> + 'static,
    {
        self.register(None, Box::new(callback))
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every matching listener.
    ///
    /// Returns how many listeners completed without error.
    pub fn publish(&self, event: &LayerEvent<'_>) -> usize {
        let kind = event.kind();
        let mut delivered = 0;

        for listener in &self.listeners {
            if listener.kind.is_some_and(|k| k != kind) {
                continue;
            }

            match panic::catch_unwind(AssertUnwindSafe(|| (listener.callback)(event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(e)) => {
                    log::warn!("listener {:?} failed on {}: {}", listener.id, kind, e);
                }
                Err(payload) => {
                    let message = payload
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    log::warn!("listener {:?} panicked on {}: {}", listener.id, kind, message);
                }
            }
        }

        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn register(&mut self, kind: Option<EventKind>, callback: EventCallback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, kind, callback });
        id
    }
}
