//! Slash commands understood by the chat REPL

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// `/quick` lists the presets, `/quick N` submits preset N (1-based)
    Quick(Option<usize>),
    History,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary text.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();

        let command = match (name, arg) {
            ("quit" | "exit" | "q", None) => ReplCommand::Quit,
            ("help" | "h" | "?", None) => ReplCommand::Help,
            ("history", None) => ReplCommand::History,
            ("quick", None) => ReplCommand::Quick(None),
            ("quick", Some(n)) => match n.parse::<usize>() {
                Ok(n) => ReplCommand::Quick(Some(n)),
                Err(_) => ReplCommand::Unknown(line.to_string()),
            },
            _ => ReplCommand::Unknown(line.to_string()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(ReplCommand::parse("How do I track my cycle?"), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/exit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse(" /? "), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/history"), Some(ReplCommand::History));
    }

    #[test]
    fn test_quick_with_and_without_index() {
        assert_eq!(ReplCommand::parse("/quick"), Some(ReplCommand::Quick(None)));
        assert_eq!(
            ReplCommand::parse("/quick 3"),
            Some(ReplCommand::Quick(Some(3)))
        );
        assert_eq!(
            ReplCommand::parse("/quick three"),
            Some(ReplCommand::Unknown("/quick three".to_string()))
        );
    }

    #[test]
    fn test_unknown_command_keeps_text() {
        assert_eq!(
            ReplCommand::parse("/models"),
            Some(ReplCommand::Unknown("/models".to_string()))
        );
    }
}
