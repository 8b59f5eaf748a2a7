//! Chat transcript log port
//!
//! Structured record of chat activity, independent of the tracing
//! diagnostics. The infrastructure layer provides a JSONL file writer.

/// A single loggable chat event with a free-form JSON payload.
#[derive(Debug, Clone)]
pub struct ChatEvent {
    pub event_type: String,
    pub payload: serde_json::Value,
}

impl ChatEvent {
    pub fn new(event_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }
}

/// Sink for chat events. Implementations must not fail the turn: recording
/// is best-effort.
pub trait ChatLog: Send + Sync {
    fn record(&self, event: ChatEvent);
}

/// Discards every event. Default when no transcript log is configured.
pub struct NoChatLog;

impl ChatLog for NoChatLog {
    fn record(&self, _event: ChatEvent) {}
}
