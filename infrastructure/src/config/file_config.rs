//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [chat]
//! min_delay_ms = 1000
//! max_delay_ms = 3000
//!
//! [advisor]
//! skin_analysis_delay_ms = 2500
//! outfit_delay_ms = 2000
//!
//! [output]
//! format = "json"
//! color = false
//!
//! [repl]
//! show_progress = true
//! history_file = "~/.local/share/wellness-guide/history.txt"
//!
//! [logging]
//! conversation_log = "./logs/conversation.jsonl"
//! file = "./logs/wellness-guide.log"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use wellness_application::ExperienceParams;
use wellness_domain::OutputFormat;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("chat.min_delay_ms ({min}) cannot exceed chat.max_delay_ms ({max})")]
    InvertedDelayRange { min: u64, max: u64 },

    #[error("history_file cannot be empty")]
    EmptyHistoryFile,
}

/// Raw chat configuration from TOML (`[chat]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Lower bound of the simulated reply latency (inclusive)
    pub min_delay_ms: u64,
    /// Upper bound of the simulated reply latency (exclusive)
    pub max_delay_ms: u64,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1000,
            max_delay_ms: 3000,
        }
    }
}

/// Raw advisor configuration from TOML (`[advisor]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAdvisorConfig {
    pub skin_analysis_delay_ms: u64,
    pub outfit_delay_ms: u64,
}

impl Default for FileAdvisorConfig {
    fn default() -> Self {
        Self {
            skin_analysis_delay_ms: 2500,
            outfit_delay_ms: 2000,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the typing indicator while a reply is pending
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw logging configuration from TOML (`[logging]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path
    pub conversation_log: Option<String>,
    /// Diagnostic log file; stderr when unset
    pub file: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat latency settings
    pub chat: FileChatConfig,
    /// Advisor latency settings
    pub advisor: FileAdvisorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.chat.min_delay_ms > self.chat.max_delay_ms {
            return Err(ConfigValidationError::InvertedDelayRange {
                min: self.chat.min_delay_ms,
                max: self.chat.max_delay_ms,
            });
        }

        if let Some(path) = &self.repl.history_file {
            if path.trim().is_empty() {
                return Err(ConfigValidationError::EmptyHistoryFile);
            }
        }

        Ok(())
    }

    /// Convert latency settings to application parameters
    pub fn to_experience_params(&self) -> ExperienceParams {
        ExperienceParams::default()
            .with_reply_delay(
                Duration::from_millis(self.chat.min_delay_ms),
                Duration::from_millis(self.chat.max_delay_ms),
            )
            .with_skin_analysis_delay(Duration::from_millis(self.advisor.skin_analysis_delay_ms))
            .with_outfit_delay(Duration::from_millis(self.advisor.outfit_delay_ms))
    }
}
