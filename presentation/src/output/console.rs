//! Console output formatter

use crate::output::formatter::OutputFormatter;
use chrono::Local;
use colored::Colorize;
use wellness_domain::skincare::RoutineStep;
use wellness_domain::{Message, MessageCategory, OutfitSuggestion, QUICK_QUESTIONS, SkinAnalysis};

/// Formats transcripts and advisor results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one chat message with sender and local time
    pub fn format_message(message: &Message) -> String {
        let time = message.timestamp().with_timezone(&Local).format("%H:%M");

        let label = if message.is_user() {
            "You".bold().blue()
        } else if matches!(message.category(), Some(MessageCategory::Apology)) {
            "Assistant".bold().yellow()
        } else {
            "Assistant".bold().magenta()
        };

        format!(
            "{} {}\n{}\n",
            label,
            format!("[{}]", time).dimmed(),
            Self::indent(message.content(), "  ")
        )
    }

    /// Format a whole transcript, oldest first
    pub fn format_transcript(messages: &[Message]) -> String {
        messages
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Numbered list of the preset questions
    pub fn format_quick_questions() -> String {
        let mut output = format!("{}\n", "Quick questions:".cyan().bold());
        for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
            output.push_str(&format!("  {} {}\n", format!("{}.", i + 1).dimmed(), question));
        }
        output
    }

    /// Format a skin analysis
    pub fn format_skin_analysis(analysis: &SkinAnalysis) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Personalized Skin Analysis"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({})\n",
            "Skin type:".cyan().bold(),
            analysis.skin_type,
            analysis.skin_type.description().dimmed()
        ));
        if !analysis.concerns.is_empty() {
            let concerns = analysis
                .concerns
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("{} {}\n", "Concerns:".cyan().bold(), concerns));
        }

        output.push_str(&Self::section_header("Morning Routine"));
        output.push_str(&Self::format_steps(&analysis.routine.morning));

        output.push_str(&Self::section_header("Evening Routine"));
        output.push_str(&Self::format_steps(&analysis.routine.evening));

        let recommendations = &analysis.recommendations;
        output.push_str(&Self::section_header("Key Ingredients"));
        for ingredient in &recommendations.ingredients {
            output.push_str(&format!("  * {}\n", ingredient));
        }

        output.push_str(&Self::section_header("Product Suggestions"));
        for product in &recommendations.products {
            output.push_str(&format!(
                "  {} {} {}\n",
                format!("{}:", product.category).yellow().bold(),
                product.suggestion,
                format!("({})", product.budget).dimmed()
            ));
        }

        output.push_str(&Self::section_header("Lifestyle Tips"));
        for tip in &recommendations.lifestyle {
            output.push_str(&format!("  * {}\n", tip));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format outfit suggestions
    pub fn format_outfits(suggestions: &[OutfitSuggestion]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Confidence-Boosting Outfits"));
        output.push('\n');

        for suggestion in suggestions {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("── {} ──", suggestion.title).magenta().bold(),
                suggestion.category.dimmed()
            ));
            output.push_str(&Self::indent(&suggestion.description, "  "));
            output.push('\n');
            output.push_str(&format!(
                "  {} {}\n",
                "Colors:".cyan(),
                suggestion.colors.join(", ")
            ));
            output.push_str(&format!(
                "  {} {}\n",
                "Accessories:".cyan(),
                suggestion.accessories.join(", ")
            ));
            output.push_str(&format!("  {}\n", suggestion.confidence.green().italic()));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_steps(steps: &[RoutineStep]) -> String {
        steps
            .iter()
            .map(|s| {
                format!(
                    "  {} {} - {}\n     {}\n",
                    format!("{}.", s.step).bold(),
                    s.product.yellow(),
                    s.description,
                    s.reason.dimmed()
                )
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.magenta(), title.bold(), line.magenta())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).magenta())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_message(&self, message: &Message) -> String {
        Self::format_message(message)
    }

    fn format_skin_analysis(&self, analysis: &SkinAnalysis) -> String {
        Self::format_skin_analysis(analysis)
    }

    fn format_outfits(&self, suggestions: &[OutfitSuggestion]) -> String {
        Self::format_outfits(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wellness_domain::{
        Conversation, GREETING, OutfitRequest, SkinConcern, SkinType, SkincareProfile,
        style::suggest,
    };

    #[test]
    fn test_transcript_contains_every_message() {
        let mut conversation = Conversation::new(Utc::now());
        conversation
            .begin_exchange("Is my cycle normal?", Utc::now())
            .unwrap();

        let output = ConsoleFormatter::format_transcript(conversation.messages());
        assert!(output.contains("You"));
        assert!(output.contains("Is my cycle normal?"));
        assert!(output.contains(&GREETING[..40]));
    }

    #[test]
    fn test_quick_questions_numbered_from_one() {
        let output = ConsoleFormatter::format_quick_questions();
        assert!(output.contains(QUICK_QUESTIONS[0]));
        assert!(output.contains("6."));
        assert!(!output.contains("7."));
    }

    #[test]
    fn test_skin_analysis_lists_concerns_and_steps() {
        let profile = SkincareProfile::new(SkinType::Sensitive).with_concern(SkinConcern::Dullness);
        let output = ConsoleFormatter::format_skin_analysis(&SkinAnalysis::for_profile(&profile));
        assert!(output.contains("Sensitive"));
        assert!(output.contains("Dullness"));
        assert!(output.contains("Morning Routine"));
        assert!(output.contains("Gentle Cleanser"));
    }

    #[test]
    fn test_outfits_show_titles() {
        let output = ConsoleFormatter::format_outfits(&suggest(&OutfitRequest::new("gala")));
        assert!(output.contains("Elegant Blazer Ensemble"));
        assert!(output.contains("Flowing Midi Dress"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
