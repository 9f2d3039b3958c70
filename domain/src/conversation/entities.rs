//! Conversation domain entities

use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::health::{GREETING, Topic};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sequential message identifier, unique within one conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// Category tag carried by assistant messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "topic")]
pub enum MessageCategory {
    /// The seeded opening message
    Greeting,
    /// A classified reply
    Reply(Topic),
    /// Fallback after a failed response
    Apology,
}

/// A message in a conversation (Entity)
///
/// Immutable once created: every field is set at append time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    content: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<MessageCategory>,
}

impl Message {
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn category(&self) -> Option<MessageCategory> {
        self.category
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Whether the conversation is waiting on a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Pending,
}

/// An append-only health conversation (Entity)
///
/// Starts with exactly one assistant greeting. Each exchange appends one
/// user message, flips to [`SessionState::Pending`], and is closed by
/// exactly one assistant message. A new exchange cannot begin while one is
/// pending.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    pending: bool,
    staged_input: String,
    next_id: u64,
}

impl Conversation {
    /// Create a conversation seeded with the greeting (id 1)
    pub fn new(now: DateTime<Utc>) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            pending: false,
            staged_input: String::new(),
            next_id: 1,
        };
        conversation.append(
            GREETING.to_string(),
            Sender::Assistant,
            Some(MessageCategory::Greeting),
            now,
        );
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn state(&self) -> SessionState {
        if self.pending {
            SessionState::Pending
        } else {
            SessionState::Idle
        }
    }

    pub fn staged_input(&self) -> &str {
        &self.staged_input
    }

    /// Replace the staged input without submitting it
    pub fn stage(&mut self, text: impl Into<String>) {
        self.staged_input = text.into();
    }

    /// Take the staged input, leaving it empty
    pub fn take_staged_input(&mut self) -> String {
        std::mem::take(&mut self.staged_input)
    }

    /// Start an exchange by appending the user's message.
    ///
    /// Fails without touching any state when a reply is already pending or
    /// the text is blank. On success the staged input is cleared.
    pub fn begin_exchange(
        &mut self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<&Message, DomainError> {
        if self.pending {
            return Err(DomainError::ResponsePending);
        }
        let question = Question::try_new(text).ok_or(DomainError::EmptyMessage)?;

        self.pending = true;
        self.staged_input.clear();
        Ok(self.append(question.into_content(), Sender::User, None, now))
    }

    /// Close the pending exchange with the assistant's reply
    pub fn complete_exchange(
        &mut self,
        content: impl Into<String>,
        category: MessageCategory,
        now: DateTime<Utc>,
    ) -> Result<&Message, DomainError> {
        if !self.pending {
            return Err(DomainError::NoPendingResponse);
        }
        self.pending = false;
        Ok(self.append(content.into(), Sender::Assistant, Some(category), now))
    }

    fn append(
        &mut self,
        content: String,
        sender: Sender,
        category: Option<MessageCategory>,
        timestamp: DateTime<Utc>,
    ) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            content,
            sender,
            timestamp,
            category,
        });
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_new_conversation_has_greeting() {
        let conversation = Conversation::new(at(0));
        assert_eq!(conversation.messages().len(), 1);

        let greeting = &conversation.messages()[0];
        assert_eq!(greeting.id().value(), 1);
        assert_eq!(greeting.sender(), Sender::Assistant);
        assert_eq!(greeting.content(), GREETING);
        assert_eq!(greeting.category(), Some(MessageCategory::Greeting));
        assert_eq!(conversation.state(), SessionState::Idle);
    }

    #[test]
    fn test_exchange_cycle() {
        let mut conversation = Conversation::new(at(0));

        let user = conversation
            .begin_exchange("  How to manage period pain?  ", at(1))
            .unwrap()
            .clone();
        assert_eq!(user.id().value(), 2);
        assert_eq!(user.content(), "How to manage period pain?");
        assert!(user.is_user());
        assert!(user.category().is_none());
        assert!(conversation.is_pending());

        let reply = conversation
            .complete_exchange(
                Topic::Menstruation.response(),
                MessageCategory::Reply(Topic::Menstruation),
                at(3),
            )
            .unwrap()
            .clone();
        assert_eq!(reply.id().value(), 3);
        assert_eq!(reply.sender(), Sender::Assistant);
        assert_eq!(reply.timestamp(), at(3));
        assert!(!conversation.is_pending());
    }

    #[test]
    fn test_blank_submission_rejected() {
        let mut conversation = Conversation::new(at(0));
        conversation.stage("draft");

        assert_eq!(
            conversation.begin_exchange("   ", at(1)).unwrap_err(),
            DomainError::EmptyMessage
        );
        assert_eq!(conversation.messages().len(), 1);
        assert!(!conversation.is_pending());
        assert_eq!(conversation.staged_input(), "draft");
    }

    #[test]
    fn test_submission_while_pending_rejected() {
        let mut conversation = Conversation::new(at(0));
        conversation.begin_exchange("hygiene tips", at(1)).unwrap();

        assert_eq!(
            conversation
                .begin_exchange("another question", at(2))
                .unwrap_err(),
            DomainError::ResponsePending
        );
        assert_eq!(conversation.messages().len(), 2);
        assert!(conversation.is_pending());
    }

    #[test]
    fn test_complete_without_pending_fails() {
        let mut conversation = Conversation::new(at(0));
        let err = conversation
            .complete_exchange("hi", MessageCategory::Apology, at(1))
            .unwrap_err();
        assert_eq!(err, DomainError::NoPendingResponse);
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn test_ids_strictly_increasing() {
        let mut conversation = Conversation::new(at(0));
        for i in 0..3 {
            conversation.begin_exchange("mood", at(i * 2 + 1)).unwrap();
            conversation
                .complete_exchange(
                    Topic::Mood.response(),
                    MessageCategory::Reply(Topic::Mood),
                    at(i * 2 + 2),
                )
                .unwrap();
        }
        let ids: Vec<u64> = conversation.messages().iter().map(|m| m.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_successful_submission_clears_staged_input() {
        let mut conversation = Conversation::new(at(0));
        conversation.stage("Basic hygiene questions");
        let staged = conversation.staged_input().to_string();
        conversation.begin_exchange(&staged, at(1)).unwrap();
        assert_eq!(conversation.staged_input(), "");
    }

    #[test]
    fn test_take_staged_input() {
        let mut conversation = Conversation::new(at(0));
        conversation.stage("Understanding mood changes");
        assert_eq!(conversation.take_staged_input(), "Understanding mood changes");
        assert_eq!(conversation.staged_input(), "");
    }

    #[test]
    fn test_message_serialization() {
        let conversation = Conversation::new(at(0));
        let json = serde_json::to_value(&conversation.messages()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["sender"], "assistant");
        assert_eq!(json["category"]["kind"], "greeting");
    }
}
