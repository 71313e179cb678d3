//! Notification events for rotorops.
//! Handlers are injected by the host; dispatch is synchronous.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::{PortalEventHandler, TracingNotifier};
