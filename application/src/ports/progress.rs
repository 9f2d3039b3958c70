//! Progress notification port
//!
//! Defines the interface for reporting while a simulated analysis runs.

/// What is being waited on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    ChatReply,
    SkinAnalysis,
    OutfitSuggestions,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::ChatReply => "chat_reply",
            AnalysisKind::SkinAnalysis => "skin_analysis",
            AnalysisKind::OutfitSuggestions => "outfit_suggestions",
        }
    }

    /// Status line shown while waiting
    pub fn waiting_message(&self) -> &'static str {
        match self {
            AnalysisKind::ChatReply => "Assistant is typing...",
            AnalysisKind::SkinAnalysis => "Analyzing your skin...",
            AnalysisKind::OutfitSuggestions => "Creating your perfect looks...",
        }
    }
}

/// Callback for progress updates during an analysis
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when the simulated analysis starts
    fn on_analysis_start(&self, kind: AnalysisKind);

    /// Called when the analysis finishes
    fn on_analysis_complete(&self, kind: AnalysisKind, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_analysis_start(&self, _kind: AnalysisKind) {}
    fn on_analysis_complete(&self, _kind: AnalysisKind, _success: bool) {}
}
