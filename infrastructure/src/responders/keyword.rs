//! Canned replies chosen by keyword classification.

use async_trait::async_trait;
use tracing::debug;
use wellness_application::{GeneratedReply, ResponseError, ResponseGenerator};
use wellness_domain::classify;

/// Local responder: classifies the question and answers with the topic's
/// canned text. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

#[async_trait]
impl ResponseGenerator for KeywordResponder {
    async fn respond(&self, text: &str) -> Result<GeneratedReply, ResponseError> {
        let topic = classify(text);
        debug!(topic = topic.as_str(), "Classified question");
        Ok(GeneratedReply::for_topic(topic))
    }
}
