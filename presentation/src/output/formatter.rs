//! Output formatter trait

use serde::Serialize;
use wellness_domain::{Message, OutfitSuggestion, OutputFormat, SkinAnalysis};

use super::console::ConsoleFormatter;

/// Renders results of the three experiences
pub trait OutputFormatter {
    /// Format one chat message
    fn format_message(&self, message: &Message) -> String;

    /// Format a skin analysis
    fn format_skin_analysis(&self, analysis: &SkinAnalysis) -> String;

    /// Format outfit suggestions
    fn format_outfits(&self, suggestions: &[OutfitSuggestion]) -> String;
}

impl dyn OutputFormatter {
    /// Formatter for the requested output format
    pub fn for_format(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => Box::new(ConsoleFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}

/// Pretty-printed JSON output
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_message(&self, message: &Message) -> String {
        Self::to_json(message)
    }

    fn format_skin_analysis(&self, analysis: &SkinAnalysis) -> String {
        Self::to_json(analysis)
    }

    fn format_outfits(&self, suggestions: &[OutfitSuggestion]) -> String {
        Self::to_json(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_domain::{OutfitRequest, SkinType, SkincareProfile, style::suggest};

    #[test]
    fn test_json_skin_analysis_is_valid() {
        let analysis = SkinAnalysis::for_profile(&SkincareProfile::new(SkinType::Dry));
        let json = JsonFormatter.format_skin_analysis(&analysis);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skin_type"], "dry");
        assert!(value["routine"]["morning"].is_array());
    }

    #[test]
    fn test_json_outfits_is_array_of_three() {
        let suggestions = suggest(&OutfitRequest::new("brunch"));
        let formatter = <dyn OutputFormatter>::for_format(OutputFormat::Json);
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_outfits(&suggestions)).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }
}
