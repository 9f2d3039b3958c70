//! REPL (Read-Eval-Print Loop) for the health assistant

use super::command::ReplCommand;
use crate::config::ReplConfig;
use crate::{ConsoleFormatter, ProgressReporter};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use wellness_application::{
    AnalysisKind, HealthChatSession, NoProgress, ProgressNotifier, RejectReason, SubmitOutcome,
};
use wellness_domain::QUICK_QUESTIONS;

/// Interactive chat REPL
pub struct ChatRepl {
    session: HealthChatSession,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl over a started session
    pub fn new(session: HealthChatSession) -> Self {
        Self {
            session,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Take care!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Wellness Guide - Health Chat         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::format_transcript(&self.session.messages()));
        println!("{}", "Type /quick for common questions, /help for commands.".dimmed());
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quick           - List quick questions");
        println!("  /quick N         - Ask quick question N");
        println!("  /history         - Show the conversation so far");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    pub async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Take care!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quick(None) => {
                println!();
                print!("{}", ConsoleFormatter::format_quick_questions());
                println!();
            }
            ReplCommand::Quick(Some(n)) => {
                match n
                    .checked_sub(1)
                    .and_then(|index| self.session.quick_fill_preset(index))
                {
                    Some(question) => {
                        println!("{} {}", ">>>".dimmed(), question);
                        let outcome = self.session.submit_staged();
                        self.await_reply(outcome).await;
                    }
                    None => println!(
                        "No quick question {}. Pick 1-{}.",
                        n,
                        QUICK_QUESTIONS.len()
                    ),
                }
            }
            ReplCommand::History => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(&self.session.messages())
                );
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_question(&self, question: &str) {
        let outcome = self.session.submit(question);
        self.await_reply(outcome).await;
    }

    async fn await_reply(&self, outcome: SubmitOutcome) {
        let pending = match outcome {
            SubmitOutcome::Accepted(pending) => pending,
            SubmitOutcome::Rejected(RejectReason::Pending) => {
                println!("{}", "Still thinking about your last question...".dimmed());
                return;
            }
            SubmitOutcome::Rejected(RejectReason::Empty) => return,
        };

        let progress: Box<dyn ProgressNotifier> = if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };

        progress.on_analysis_start(AnalysisKind::ChatReply);
        let reply = pending.wait().await;
        progress.on_analysis_complete(AnalysisKind::ChatReply, reply.is_some());

        println!();
        if let Some(message) = reply {
            println!("{}", ConsoleFormatter::format_message(&message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;
    use std::time::Duration;
    use wellness_application::{
        Clock, DelayPolicy, GeneratedReply, ResponseError, ResponseGenerator, Timer,
    };
    use wellness_domain::{Topic, classify};

    struct Classifier;

    #[async_trait]
    impl ResponseGenerator for Classifier {
        async fn respond(&self, text: &str) -> Result<GeneratedReply, ResponseError> {
            Ok(GeneratedReply::for_topic(classify(text)))
        }
    }

    struct Instant;

    #[async_trait]
    impl Timer for Instant {
        async fn sleep(&self, _duration: Duration) {}
    }

    impl DelayPolicy for Instant {
        fn next_delay(&self) -> Duration {
            Duration::ZERO
        }
    }

    impl Clock for Instant {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    fn repl() -> ChatRepl {
        let session = HealthChatSession::initialize(
            Arc::new(Classifier),
            Arc::new(Instant),
            Arc::new(Instant),
            Arc::new(Instant),
        );
        ChatRepl::new(session).with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        })
    }

    #[tokio::test]
    async fn test_quick_command_submits_preset() {
        let repl = repl();
        assert!(!repl.handle_command(ReplCommand::Quick(Some(1))).await);

        let messages = repl.session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content(), QUICK_QUESTIONS[0]);
        assert_eq!(messages[2].content(), classify(QUICK_QUESTIONS[0]).response());
        assert!(!repl.session.is_pending());
    }

    #[tokio::test]
    async fn test_quick_out_of_range_changes_nothing() {
        let repl = repl();
        repl.handle_command(ReplCommand::Quick(Some(0))).await;
        repl.handle_command(ReplCommand::Quick(Some(7))).await;
        assert_eq!(repl.session.messages().len(), 1);
        assert!(repl.session.staged_input().is_empty());
    }

    #[tokio::test]
    async fn test_question_gets_reply() {
        let repl = repl();
        repl.process_question("Any hygiene advice?").await;

        let messages = repl.session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content(), Topic::Hygiene.response());
    }

    #[tokio::test]
    async fn test_quit_exits() {
        assert!(repl().handle_command(ReplCommand::Quit).await);
    }
}
