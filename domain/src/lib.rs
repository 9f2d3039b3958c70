//! Domain layer for wellness-guide
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Health Assistant
//!
//! - **Conversation**: append-only message log seeded with a greeting, with
//!   at most one reply pending at a time
//! - **Classifier**: ordered keyword rules mapping a question to a [`Topic`]
//!   and its canned reply; the first matching rule wins
//!
//! ## Advisors
//!
//! - **Skincare**: questionnaire → fixed routine and recommendations
//! - **Style**: occasion and preferences → fixed outfit catalog

pub mod config;
pub mod conversation;
pub mod core;
pub mod health;
pub mod skincare;
pub mod style;

// Re-export commonly used types
pub use config::OutputFormat;
pub use conversation::{Conversation, Message, MessageCategory, MessageId, Sender, SessionState};
pub use core::{error::DomainError, question::Question};
pub use health::{APOLOGY, GREETING, QUICK_QUESTIONS, Topic, classify, respond};
pub use skincare::{AgeRange, Budget, SkinAnalysis, SkinConcern, SkinType, SkincareProfile};
pub use style::{BodyType, CulturalPreference, OutfitRequest, OutfitSuggestion, Weather};
