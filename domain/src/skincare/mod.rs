//! Skincare guide domain.
//!
//! - [`profile::SkincareProfile`] — questionnaire answers
//! - [`analysis::SkinAnalysis`] — routine and recommendations for a profile

pub mod analysis;
pub mod profile;

pub use analysis::{ProductSuggestion, Recommendations, Routine, RoutineStep, SkinAnalysis};
pub use profile::{AgeRange, Budget, SkinConcern, SkinType, SkincareProfile};
