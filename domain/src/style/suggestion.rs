//! Outfit suggestion catalog

use super::request::OutfitRequest;
use serde::{Deserialize, Serialize};

/// A suggested look (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub description: String,
    pub confidence: String,
    pub colors: Vec<String>,
    pub accessories: Vec<String>,
}

impl OutfitSuggestion {
    fn new(
        id: u32,
        category: &str,
        title: &str,
        description: &str,
        confidence: &str,
        colors: [&str; 3],
        accessories: [&str; 3],
    ) -> Self {
        Self {
            id,
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            confidence: confidence.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            accessories: accessories.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Suggestions for a request. The catalog is fixed and ignores the answers.
pub fn suggest(_request: &OutfitRequest) -> Vec<OutfitSuggestion> {
    vec![
        OutfitSuggestion::new(
            1,
            "Professional Chic",
            "Elegant Blazer Ensemble",
            "A tailored blazer with matching trousers creates a polished, confident look perfect for presentations. The structured silhouette enhances your natural grace while the neutral tones project professionalism.",
            "You'll feel empowered and ready to conquer any challenge!",
            ["Navy Blue", "Cream White", "Soft Gray"],
            ["Pearl earrings", "Leather handbag", "Low heels"],
        ),
        OutfitSuggestion::new(
            2,
            "Smart Casual",
            "Flowing Midi Dress",
            "A midi dress in a flattering cut that moves beautifully with you. This style celebrates your femininity while maintaining the perfect balance of comfort and sophistication.",
            "This look radiates confidence and authentic beauty!",
            ["Dusty Rose", "Sage Green", "Warm Taupe"],
            ["Delicate necklace", "Block heels", "Crossbody bag"],
        ),
        OutfitSuggestion::new(
            3,
            "Cultural Elegance",
            "Modern Traditional Fusion",
            "A contemporary take on traditional wear that honors your heritage while expressing your personal style. The rich fabrics and thoughtful details create a stunning, respectful appearance.",
            "You'll feel beautifully connected to your roots while looking absolutely radiant!",
            ["Deep Burgundy", "Golden Yellow", "Rich Emerald"],
            ["Traditional earrings", "Embroidered dupatta", "Comfortable flats"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::request::{BodyType, Weather};

    #[test]
    fn test_three_suggestions_in_order() {
        let suggestions = suggest(&OutfitRequest::new("wedding"));
        let categories: Vec<&str> = suggestions.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Professional Chic", "Smart Casual", "Cultural Elegance"]
        );
        assert!(suggestions.iter().all(|s| s.colors.len() == 3));
    }

    #[test]
    fn test_catalog_ignores_answers() {
        let plain = suggest(&OutfitRequest::new("office"));
        let detailed = suggest(
            &OutfitRequest::new("beach party")
                .with_body_type(BodyType::Apple)
                .with_weather(Weather::HotSunny),
        );
        assert_eq!(plain, detailed);
    }
}
