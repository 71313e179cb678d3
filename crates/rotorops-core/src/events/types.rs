//! Event payload types.

/// Where a loaded register came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterSource {
    /// Read from the configured hazard store.
    Store,
    /// The built-in demo register, served because the store failed.
    Demo,
}

/// How prominently a notification should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Destructive,
}

/// Payload for `on_register_loaded`.
#[derive(Debug, Clone)]
pub struct RegisterLoadedEvent {
    pub source: RegisterSource,
    pub record_count: usize,
    pub rejected_count: usize,
}

/// Payload for `on_record_rejected`.
#[derive(Debug, Clone)]
pub struct RecordRejectedEvent {
    pub record_id: String,
    pub message: String,
}

/// Payload for `on_notification`: a user-facing toast.
#[derive(Debug, Clone)]
pub struct NotificationEvent {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
