//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message content cannot be empty")]
    EmptyMessage,

    #[error("A response is already pending")]
    ResponsePending,

    #[error("No response is pending")]
    NoPendingResponse,

    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },
}

impl DomainError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        DomainError::UnknownOption {
            kind,
            value: value.to_string(),
        }
    }
}
