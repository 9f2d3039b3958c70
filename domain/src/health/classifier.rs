//! Keyword classifier for health questions
//!
//! Maps free text to a [`Topic`] by ordered substring checks over a fixed
//! rule table. Rules are not mutually exclusive: "period cramp pain" matches
//! both the menstruation and the pain rule, and the menstruation rule wins
//! because it is checked first.
//!
//! # Example
//!
//! ```
//! use wellness_domain::health::{classify, Topic};
//!
//! assert_eq!(classify("How to manage PERIOD pain?"), Topic::Menstruation);
//! assert_eq!(classify("cramps again"), Topic::Pain);
//! assert_eq!(classify("tell me a joke"), Topic::General);
//! ```

use super::topic::Topic;

/// A static keyword → topic association
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub topic: Topic,
    /// Lowercase substrings; any one of them triggers the rule
    pub keywords: &'static [&'static str],
}

impl TopicRule {
    /// Check whether already-lowercased text triggers this rule
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

/// Rule table, highest priority first. [`Topic::General`] has no rule.
pub const RULES: [TopicRule; 6] = [
    TopicRule {
        topic: Topic::Menstruation,
        keywords: &["period", "menstruation", "cycle"],
    },
    TopicRule {
        topic: Topic::Pain,
        keywords: &["pain", "cramp"],
    },
    TopicRule {
        topic: Topic::MedicalConcern,
        keywords: &["doctor", "medical", "see", "concern"],
    },
    TopicRule {
        topic: Topic::Hygiene,
        keywords: &["hygiene", "clean", "wash"],
    },
    TopicRule {
        topic: Topic::Mood,
        keywords: &["mood", "emotional", "stress", "anxiety"],
    },
    TopicRule {
        topic: Topic::Wellness,
        keywords: &["healthy", "wellness", "lifestyle"],
    },
];

/// Classify text into a topic. Never fails.
pub fn classify(text: &str) -> Topic {
    let normalized = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::General)
}

/// Canned reply for the topic `text` classifies into
pub fn respond(text: &str) -> &'static str {
    classify(text).response()
}
