//! Conversation domain.
//!
//! - [`entities::Conversation`] — append-only message log with a pending flag
//! - [`entities::Message`] — a single immutable message

pub mod entities;

pub use entities::{Conversation, Message, MessageCategory, MessageId, Sender, SessionState};
