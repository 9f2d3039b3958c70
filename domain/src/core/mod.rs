//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated, trimmed question for the assistant
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — UTF-8 safe string helpers

pub mod error;
pub mod question;
pub mod string;
