//! PortalEventHandler trait with no-op defaults.

use super::types::*;

/// Sink for portal events.
///
/// All methods have no-op defaults so handlers override only what they
/// need. `Send + Sync` so one handler can be shared across threads.
pub trait PortalEventHandler: Send + Sync {
    fn on_register_loaded(&self, _event: &RegisterLoadedEvent) {}
    fn on_record_rejected(&self, _event: &RecordRejectedEvent) {}
    fn on_notification(&self, _event: &NotificationEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}

/// Handler that writes every event to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl PortalEventHandler for TracingNotifier {
    fn on_register_loaded(&self, event: &RegisterLoadedEvent) {
        ::tracing::info!(
            source = ?event.source,
            records = event.record_count,
            rejected = event.rejected_count,
            "risk register loaded"
        );
    }

    fn on_record_rejected(&self, event: &RecordRejectedEvent) {
        ::tracing::warn!(id = %event.record_id, "{}", event.message);
    }

    fn on_notification(&self, event: &NotificationEvent) {
        match event.level {
            NotificationLevel::Info => {
                ::tracing::info!(title = %event.title, "{}", event.description)
            }
            NotificationLevel::Destructive => {
                ::tracing::warn!(title = %event.title, "{}", event.description)
            }
        }
    }

    fn on_error(&self, event: &ErrorEvent) {
        ::tracing::error!(code = %event.error_code, "{}", event.message);
    }
}
