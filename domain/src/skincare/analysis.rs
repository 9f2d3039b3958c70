//! Skin analysis result
//!
//! The routine and recommendations are a fixed catalog. Only the skin type
//! and the concern list echo the questionnaire.

use super::profile::{SkinConcern, SkinType, SkincareProfile};
use serde::{Deserialize, Serialize};

/// One step of a daily routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStep {
    pub step: u8,
    pub product: String,
    pub description: String,
    pub reason: String,
}

impl RoutineStep {
    fn new(step: u8, product: &str, description: &str, reason: &str) -> Self {
        Self {
            step,
            product: product.to_string(),
            description: description.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Morning and evening routines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub morning: Vec<RoutineStep>,
    pub evening: Vec<RoutineStep>,
}

/// A product pick for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSuggestion {
    pub category: String,
    pub suggestion: String,
    pub budget: String,
}

impl ProductSuggestion {
    fn new(category: &str, suggestion: &str, budget: &str) -> Self {
        Self {
            category: category.to_string(),
            suggestion: suggestion.to_string(),
            budget: budget.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub ingredients: Vec<String>,
    pub lifestyle: Vec<String>,
    pub products: Vec<ProductSuggestion>,
}

/// Personalized skincare analysis (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinAnalysis {
    pub skin_type: SkinType,
    pub concerns: Vec<SkinConcern>,
    pub routine: Routine,
    pub recommendations: Recommendations,
}

impl SkinAnalysis {
    /// Build the analysis for a questionnaire.
    ///
    /// A missing skin type falls back to [`SkinType::Combination`].
    pub fn for_profile(profile: &SkincareProfile) -> Self {
        Self {
            skin_type: profile.skin_type.unwrap_or_default(),
            concerns: profile.concerns.clone(),
            routine: Routine {
                morning: morning_routine(),
                evening: evening_routine(),
            },
            recommendations: Recommendations {
                ingredients: to_strings(&[
                    "Hyaluronic Acid",
                    "Niacinamide",
                    "Ceramides",
                    "Vitamin E",
                ]),
                lifestyle: to_strings(&[
                    "Drink 8 glasses of water daily",
                    "Get 7-8 hours of sleep",
                    "Eat omega-3 rich foods",
                    "Manage stress through meditation",
                ]),
                products: vec![
                    ProductSuggestion::new(
                        "Cleanser",
                        "CeraVe Foaming Facial Cleanser or Neutrogena Ultra Gentle",
                        "Budget-friendly",
                    ),
                    ProductSuggestion::new(
                        "Moisturizer",
                        "Cetaphil Daily Facial Moisturizer or The Ordinary Natural Moisturizing Factors",
                        "Budget-friendly",
                    ),
                    ProductSuggestion::new(
                        "Sunscreen",
                        "EltaMD UV Clear or Neutrogena Ultra Sheer",
                        "Mid-range",
                    ),
                ],
            },
        }
    }
}

fn morning_routine() -> Vec<RoutineStep> {
    vec![
        RoutineStep::new(
            1,
            "Gentle Cleanser",
            "Mild, pH-balanced cleanser",
            "Removes overnight impurities without stripping natural oils",
        ),
        RoutineStep::new(
            2,
            "Vitamin C Serum",
            "10-15% L-Ascorbic Acid or Magnesium Ascorbyl Phosphate",
            "Protects from environmental damage and brightens skin",
        ),
        RoutineStep::new(
            3,
            "Moisturizer",
            "Lightweight, non-comedogenic formula",
            "Maintains hydration and strengthens skin barrier",
        ),
        RoutineStep::new(
            4,
            "Broad-Spectrum SPF 30+",
            "Mineral or chemical sunscreen",
            "Essential protection from UV damage and premature aging",
        ),
    ]
}

fn evening_routine() -> Vec<RoutineStep> {
    vec![
        RoutineStep::new(
            1,
            "Oil Cleanser (if wearing makeup)",
            "Gentle oil-based cleanser",
            "Effectively removes makeup and sunscreen",
        ),
        RoutineStep::new(
            2,
            "Water-Based Cleanser",
            "Same as morning cleanser",
            "Completes the double cleanse for thorough cleaning",
        ),
        RoutineStep::new(
            3,
            "Treatment (3x per week)",
            "Retinol or AHA/BHA",
            "Promotes cell turnover and addresses specific concerns",
        ),
        RoutineStep::new(
            4,
            "Night Moisturizer",
            "Richer formula with ceramides",
            "Supports overnight repair and regeneration",
        ),
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_echoes_profile() {
        let profile = SkincareProfile::new(SkinType::Oily)
            .with_concern(SkinConcern::AcneBreakouts)
            .with_concern(SkinConcern::LargePores);
        let analysis = SkinAnalysis::for_profile(&profile);

        assert_eq!(analysis.skin_type, SkinType::Oily);
        assert_eq!(
            analysis.concerns,
            vec![SkinConcern::AcneBreakouts, SkinConcern::LargePores]
        );
    }

    #[test]
    fn test_missing_skin_type_falls_back_to_combination() {
        let analysis = SkinAnalysis::for_profile(&SkincareProfile::default());
        assert_eq!(analysis.skin_type, SkinType::Combination);
    }

    #[test]
    fn test_routine_shape() {
        let analysis = SkinAnalysis::for_profile(&SkincareProfile::new(SkinType::Normal));
        let steps: Vec<u8> = analysis.routine.morning.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);
        assert_eq!(analysis.routine.evening.len(), 4);
        assert_eq!(analysis.routine.morning[3].product, "Broad-Spectrum SPF 30+");
        assert_eq!(analysis.recommendations.products.len(), 3);
        assert_eq!(analysis.recommendations.ingredients.len(), 4);
    }

    #[test]
    fn test_routine_independent_of_skin_type() {
        let dry = SkinAnalysis::for_profile(&SkincareProfile::new(SkinType::Dry));
        let oily = SkinAnalysis::for_profile(&SkincareProfile::new(SkinType::Oily));
        assert_eq!(dry.routine, oily.routine);
        assert_eq!(dry.recommendations, oily.recommendations);
    }
}
