//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_skin;
pub mod health_chat;
pub(crate) mod shared;
pub mod suggest_outfits;

pub use shared::AdvisorError;
