//! Response generator port
//!
//! Defines how the chat session obtains a reply for a user question.

use async_trait::async_trait;
use thiserror::Error;
use wellness_domain::Topic;

/// Errors that can occur while generating a reply
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Responder unavailable: {0}")]
    Unavailable(String),
}

/// A generated reply and the topic it answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReply {
    pub topic: Topic,
    pub content: String,
}

impl GeneratedReply {
    /// The canned reply for a topic
    pub fn for_topic(topic: Topic) -> Self {
        Self {
            topic,
            content: topic.response().to_string(),
        }
    }
}

/// Source of assistant replies
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Produce a reply for trimmed, non-empty user text
    async fn respond(&self, text: &str) -> Result<GeneratedReply, ResponseError>;
}
