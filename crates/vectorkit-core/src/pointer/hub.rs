//! Pointer hub implementation.
//!
//! Provides the `PointerHub` struct that tracks the last pointer position
//! and fans events out to filtered subscribers.

use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::events::{PointerEvent, PointerEventKind};

/// Subscription handle for unsubscribing from pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific pointer event kinds
#[derive(Debug, Clone, Default)]
pub enum PointerFilter {
    /// Receive all pointer events.
    #[default]
    All,
    /// Receive events matching any of these kinds.
    Kinds(Vec<PointerEventKind>),
}

impl PointerFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &PointerEvent) -> bool {
        match self {
            PointerFilter::All => true,
            PointerFilter::Kinds(kinds) => kinds.contains(&event.kind),
        }
    }
}

/// Type alias for pointer handler functions
type PointerHandler = Box<dyn Fn(PointerEvent) + Send + Sync>;

/// Pointer-event hub owned by a drawing surface.
///
/// Handlers run on the dispatching thread, so they should return quickly
/// to avoid blocking event delivery.
pub struct PointerHub {
    /// Registered handlers keyed by subscription handle
    handlers: RwLock<HashMap<SubscriptionId, (PointerFilter, PointerHandler)>>,
    /// Last known pointer position
    position: RwLock<(f64, f64)>,
}

impl PointerHub {
    /// Create a new hub with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            position: RwLock::new((0.0, 0.0)),
        }
    }

    /// Subscribe to pointer events.
    ///
    /// Returns a handle that identifies the subscription; passing it to
    /// [`unsubscribe`](Self::unsubscribe) removes the handler.
    pub fn subscribe<F>(&self, filter: PointerFilter, handler: F) -> SubscriptionId
    where
        F: Fn(PointerEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut handlers = self.handlers.write();
        handlers.insert(id, (filter, Box::new(handler)));
        tracing::debug!("Pointer subscription {} added", id);
        id
    }

    /// Remove a subscription. Returns false if the handle was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Pointer subscription {} removed", id);
        }
        removed
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Deliver an event: records the position, then calls every handler
    /// whose filter matches.
    pub fn dispatch(&self, event: PointerEvent) {
        *self.position.write() = (event.x, event.y);

        let handlers = self.handlers.read();
        for (_, (filter, handler)) in handlers.iter() {
            if filter.matches(&event) {
                handler(event);
            }
        }
    }

    /// Last position seen by [`dispatch`](Self::dispatch).
    pub fn position(&self) -> (f64, f64) {
        *self.position.read()
    }
}

impl Default for PointerHub {
    fn default() -> Self {
        Self::new()
    }
}
