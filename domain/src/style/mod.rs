//! Dress confidence domain.
//!
//! - [`request::OutfitRequest`] — occasion and optional preferences
//! - [`suggestion::suggest`] — the fixed outfit catalog

pub mod request;
pub mod suggestion;

pub use request::{BodyType, CulturalPreference, OutfitRequest, Weather};
pub use suggestion::{OutfitSuggestion, suggest};
