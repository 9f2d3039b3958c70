//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording chat and advisor
//! events (user messages, assistant replies, failed replies, finished
//! analyses) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! transcript in a machine-readable format (JSONL).

use serde_json::Value;
use wellness_domain::Message;

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The adapter adds the timestamp.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "user_message", "assistant_message").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Event for a message appended to a conversation
    pub fn message(message: &Message) -> Self {
        let event_type = if message.is_user() {
            "user_message"
        } else {
            "assistant_message"
        };
        let payload = serde_json::to_value(message).unwrap_or(Value::Null);
        Self::new(event_type, payload)
    }
}

/// Port for logging conversation events to a structured log.
///
/// The `log` method is synchronous and non-fallible so it never disrupts a
/// conversation; logging failures are ignored.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wellness_domain::Conversation;

    #[test]
    fn test_message_event_type_follows_sender() {
        let mut conversation = Conversation::new(Utc::now());
        let greeting = ConversationEvent::message(&conversation.messages()[0]);
        assert_eq!(greeting.event_type, "assistant_message");
        assert_eq!(greeting.payload["id"], 1);

        let user = conversation
            .begin_exchange("hygiene tips", Utc::now())
            .unwrap()
            .clone();
        let event = ConversationEvent::message(&user);
        assert_eq!(event.event_type, "user_message");
        assert_eq!(event.payload["content"], "hygiene tips");
    }
}
