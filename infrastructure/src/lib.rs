//! Infrastructure layer for wellness-guide
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod responders;
pub mod timing;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAdvisorConfig, FileChatConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
pub use responders::KeywordResponder;
pub use timing::{FixedDelay, SystemClock, TokioTimer, UniformDelay};
