//! Application-level configuration.
//!
//! - [`ExperienceParams`] — simulated latency for chat replies and advisors

pub mod experience_params;

pub use experience_params::ExperienceParams;
