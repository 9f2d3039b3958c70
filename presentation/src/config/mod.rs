//! Presentation-level configuration
//!
//! Settings the REPL needs, resolved from the merged config file by the
//! binary.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the typing indicator while a reply is pending
    pub show_progress: bool,
    /// History file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Where line history is read from and saved to
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("wellness-guide").join("history.txt"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file_wins() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/h.txt")),
            ..ReplConfig::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/h.txt")));
    }

    #[test]
    fn test_default_history_under_app_dir() {
        if let Some(path) = ReplConfig::default().history_path() {
            assert!(path.ends_with("wellness-guide/history.txt"));
        }
    }
}
