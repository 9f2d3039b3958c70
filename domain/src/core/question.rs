//! Question value object

use serde::{Deserialize, Serialize};

/// A question submitted to the health assistant (Value Object)
///
/// Always holds trimmed, non-empty text. Whitespace-only input never
/// becomes a `Question`, which is what lets the chat session treat blank
/// submissions as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if blank
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = crate::DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s).ok_or(crate::DomainError::EmptyMessage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::try_new("  How to manage period pain?\n").unwrap();
        assert_eq!(q.content(), "How to manage period pain?");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
        assert!(Question::try_new("\t\n").is_none());
    }

    #[test]
    fn test_try_from_str() {
        let q: Question = "hygiene tips".try_into().unwrap();
        assert_eq!(q.to_string(), "hygiene tips");

        let err = Question::try_from(" ").unwrap_err();
        assert_eq!(err, crate::DomainError::EmptyMessage);
    }
}
