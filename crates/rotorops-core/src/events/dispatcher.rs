//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::PortalEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn PortalEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn PortalEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not stop later handlers from receiving it.
    fn emit<F: Fn(&dyn PortalEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::error!("event handler panicked");
            }
        }
    }

    pub fn emit_register_loaded(&self, event: &RegisterLoadedEvent) {
        self.emit(|h| h.on_register_loaded(event));
    }

    pub fn emit_record_rejected(&self, event: &RecordRejectedEvent) {
        self.emit(|h| h.on_record_rejected(event));
    }

    pub fn emit_notification(&self, event: &NotificationEvent) {
        self.emit(|h| h.on_notification(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
