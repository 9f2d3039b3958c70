//! Health assistant domain.
//!
//! - [`topic::Topic`] — classification outcome with its canned reply
//! - [`classifier`] — ordered keyword rules mapping text to a topic
//! - [`GREETING`], [`APOLOGY`], [`QUICK_QUESTIONS`] — fixed assistant copy

pub mod classifier;
pub mod topic;

pub use classifier::{RULES, TopicRule, classify, respond};
pub use topic::Topic;

/// Seeded first message of every conversation
pub const GREETING: &str = "Hello! I'm your personal health assistant. I'm here to help with questions about women's health, periods, wellness, and general health concerns. Feel free to ask me anything - this is a safe, judgment-free space. What would you like to know?";

/// Reply appended when generating a response fails
pub const APOLOGY: &str = "I apologize, but I'm having trouble responding right now. Please try again, and remember that for urgent health concerns, it's always best to contact a healthcare provider directly.";

/// Preset questions offered for quick fill
pub const QUICK_QUESTIONS: [&str; 6] = [
    "What's normal during menstruation?",
    "How to manage period pain?",
    "Signs I should see a doctor?",
    "Healthy lifestyle tips for women",
    "Understanding mood changes",
    "Basic hygiene questions",
];

/// Look up a preset question by zero-based index
pub fn quick_question(index: usize) -> Option<&'static str> {
    QUICK_QUESTIONS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_question_lookup() {
        assert_eq!(quick_question(1), Some("How to manage period pain?"));
        assert_eq!(quick_question(QUICK_QUESTIONS.len()), None);
    }
}
