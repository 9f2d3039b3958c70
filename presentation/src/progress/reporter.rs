//! Progress reporting while a simulated analysis runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use wellness_application::{AnalysisKind, ProgressNotifier};

/// Animated spinner on stderr, one at a time
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.magenta} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
    }

    fn done_message(kind: AnalysisKind) -> &'static str {
        match kind {
            AnalysisKind::ChatReply => "Reply ready",
            AnalysisKind::SkinAnalysis => "Analysis complete",
            AnalysisKind::OutfitSuggestions => "Looks ready",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_analysis_start(&self, kind: AnalysisKind) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(kind.waiting_message());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_analysis_complete(&self, kind: AnalysisKind, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        match kind {
            // The reply itself is printed right after; leave no residue
            AnalysisKind::ChatReply => pb.finish_and_clear(),
            _ if success => {
                pb.finish_with_message(format!("{}", Self::done_message(kind).green()))
            }
            _ => pb.abandon_with_message(format!("{}", "Something went wrong".red())),
        }
    }
}

/// Plain-text progress for non-interactive output
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_analysis_start(&self, kind: AnalysisKind) {
        eprintln!("{} {}", "->".cyan(), kind.waiting_message());
    }

    fn on_analysis_complete(&self, kind: AnalysisKind, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), ProgressReporter::done_message(kind));
        } else {
            eprintln!("  {} {} failed", "x".red(), kind.as_str());
        }
    }
}
