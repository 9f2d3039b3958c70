//! Application layer for wellness-guide
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExperienceParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{AnalysisKind, NoProgress, ProgressNotifier},
    response_generator::{GeneratedReply, ResponseError, ResponseGenerator},
    timing::{Clock, DelayPolicy, Timer},
};
pub use use_cases::AdvisorError;
pub use use_cases::analyze_skin::AnalyzeSkinUseCase;
pub use use_cases::health_chat::{HealthChatSession, PendingReply, RejectReason, SubmitOutcome};
pub use use_cases::suggest_outfits::SuggestOutfitsUseCase;
