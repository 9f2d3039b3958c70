//! Skincare questionnaire value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Self-reported skin type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SkinType {
    Oily,
    Dry,
    #[default]
    Combination,
    Normal,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Normal,
        SkinType::Sensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Normal => "normal",
            SkinType::Sensitive => "sensitive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
            SkinType::Normal => "Normal",
            SkinType::Sensitive => "Sensitive",
        }
    }

    /// Short description shown next to the choice
    pub fn description(&self) -> &'static str {
        match self {
            SkinType::Oily => "Shiny, large pores, prone to breakouts",
            SkinType::Dry => "Tight, flaky, rough texture",
            SkinType::Combination => "Oily T-zone, dry cheeks",
            SkinType::Normal => "Balanced, few imperfections",
            SkinType::Sensitive => "Easily irritated, reactive",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SkinType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::unknown("skin type", &s))
    }
}

/// Skin concern from the questionnaire checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinConcern {
    AcneBreakouts,
    DarkSpots,
    FineLines,
    LargePores,
    UnevenTone,
    Dryness,
    OilyTZone,
    Sensitivity,
    DarkCircles,
    Dullness,
}

impl SkinConcern {
    pub const ALL: [SkinConcern; 10] = [
        SkinConcern::AcneBreakouts,
        SkinConcern::DarkSpots,
        SkinConcern::FineLines,
        SkinConcern::LargePores,
        SkinConcern::UnevenTone,
        SkinConcern::Dryness,
        SkinConcern::OilyTZone,
        SkinConcern::Sensitivity,
        SkinConcern::DarkCircles,
        SkinConcern::Dullness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinConcern::AcneBreakouts => "acne-breakouts",
            SkinConcern::DarkSpots => "dark-spots",
            SkinConcern::FineLines => "fine-lines",
            SkinConcern::LargePores => "large-pores",
            SkinConcern::UnevenTone => "uneven-tone",
            SkinConcern::Dryness => "dryness",
            SkinConcern::OilyTZone => "oily-t-zone",
            SkinConcern::Sensitivity => "sensitivity",
            SkinConcern::DarkCircles => "dark-circles",
            SkinConcern::Dullness => "dullness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkinConcern::AcneBreakouts => "Acne/Breakouts",
            SkinConcern::DarkSpots => "Dark spots/Hyperpigmentation",
            SkinConcern::FineLines => "Fine lines/Wrinkles",
            SkinConcern::LargePores => "Large pores",
            SkinConcern::UnevenTone => "Uneven skin tone",
            SkinConcern::Dryness => "Dryness/Dehydration",
            SkinConcern::OilyTZone => "Oily T-zone",
            SkinConcern::Sensitivity => "Sensitivity/Redness",
            SkinConcern::DarkCircles => "Dark circles",
            SkinConcern::Dullness => "Dullness",
        }
    }
}

impl std::fmt::Display for SkinConcern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SkinConcern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::unknown("skin concern", &s))
    }
}

/// Age bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "teens")]
    Teens,
    #[serde(rename = "20s")]
    Twenties,
    #[serde(rename = "30s")]
    Thirties,
    #[serde(rename = "40s+")]
    FortiesPlus,
}

impl AgeRange {
    pub const ALL: [AgeRange; 4] = [
        AgeRange::Teens,
        AgeRange::Twenties,
        AgeRange::Thirties,
        AgeRange::FortiesPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::Teens => "teens",
            AgeRange::Twenties => "20s",
            AgeRange::Thirties => "30s",
            AgeRange::FortiesPlus => "40s+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::Teens => "Teens",
            AgeRange::Twenties => "20s",
            AgeRange::Thirties => "30s",
            AgeRange::FortiesPlus => "40s+",
        }
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AgeRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::unknown("age range", &s))
    }
}

/// Spending tier for product picks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Budget,
    Mid,
    Premium,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Budget, Budget::Mid, Budget::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Budget => "budget",
            Budget::Mid => "mid",
            Budget::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Budget => "Budget-friendly",
            Budget::Mid => "Mid-range",
            Budget::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Budget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::unknown("budget", &s))
    }
}

/// Answers collected by the skincare questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkincareProfile {
    pub skin_type: Option<SkinType>,
    /// Selection order is kept
    pub concerns: Vec<SkinConcern>,
    pub age_range: Option<AgeRange>,
    pub budget: Option<Budget>,
}

impl SkincareProfile {
    pub fn new(skin_type: SkinType) -> Self {
        Self {
            skin_type: Some(skin_type),
            ..Self::default()
        }
    }

    pub fn with_concern(mut self, concern: SkinConcern) -> Self {
        self.set_concern(concern, true);
        self
    }

    pub fn with_age_range(mut self, age_range: AgeRange) -> Self {
        self.age_range = Some(age_range);
        self
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Check or uncheck a concern. Checking twice keeps a single entry.
    pub fn set_concern(&mut self, concern: SkinConcern, checked: bool) {
        if checked {
            if !self.concerns.contains(&concern) {
                self.concerns.push(concern);
            }
        } else {
            self.concerns.retain(|c| *c != concern);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skin_type() {
        assert_eq!("Oily".parse::<SkinType>().unwrap(), SkinType::Oily);
        assert!("scaly".parse::<SkinType>().is_err());
        assert_eq!(SkinType::default(), SkinType::Combination);
    }

    #[test]
    fn test_parse_round_trips_every_option() {
        for concern in SkinConcern::ALL {
            assert_eq!(concern.as_str().parse::<SkinConcern>().unwrap(), concern);
        }
        for age in AgeRange::ALL {
            assert_eq!(age.as_str().parse::<AgeRange>().unwrap(), age);
        }
        for budget in Budget::ALL {
            assert_eq!(budget.as_str().parse::<Budget>().unwrap(), budget);
        }
    }

    #[test]
    fn test_serde_names_match_parse_names() {
        let json = serde_json::to_string(&AgeRange::FortiesPlus).unwrap();
        assert_eq!(json, "\"40s+\"");
        let json = serde_json::to_string(&SkinConcern::OilyTZone).unwrap();
        assert_eq!(json, "\"oily-t-zone\"");
    }

    #[test]
    fn test_concern_toggle_keeps_order() {
        let mut profile = SkincareProfile::new(SkinType::Dry)
            .with_concern(SkinConcern::Dullness)
            .with_concern(SkinConcern::FineLines)
            .with_concern(SkinConcern::Dullness);
        assert_eq!(
            profile.concerns,
            vec![SkinConcern::Dullness, SkinConcern::FineLines]
        );

        profile.set_concern(SkinConcern::Dullness, false);
        assert_eq!(profile.concerns, vec![SkinConcern::FineLines]);
    }
}
