//! Outfit request value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    Pear,
    Apple,
    Hourglass,
    Rectangle,
    InvertedTriangle,
    PreferNotToSay,
}

impl BodyType {
    pub const ALL: [BodyType; 6] = [
        BodyType::Pear,
        BodyType::Apple,
        BodyType::Hourglass,
        BodyType::Rectangle,
        BodyType::InvertedTriangle,
        BodyType::PreferNotToSay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Pear => "pear",
            BodyType::Apple => "apple",
            BodyType::Hourglass => "hourglass",
            BodyType::Rectangle => "rectangle",
            BodyType::InvertedTriangle => "inverted-triangle",
            BodyType::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyType::Pear => "Pear",
            BodyType::Apple => "Apple",
            BodyType::Hourglass => "Hourglass",
            BodyType::Rectangle => "Rectangle",
            BodyType::InvertedTriangle => "Inverted Triangle",
            BodyType::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl FromStr for BodyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::unknown("body type", &s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weather {
    HotSunny,
    WarmMild,
    CoolBreezy,
    ColdWinter,
    Rainy,
}

impl Weather {
    pub const ALL: [Weather; 5] = [
        Weather::HotSunny,
        Weather::WarmMild,
        Weather::CoolBreezy,
        Weather::ColdWinter,
        Weather::Rainy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::HotSunny => "hot-sunny",
            Weather::WarmMild => "warm-mild",
            Weather::CoolBreezy => "cool-breezy",
            Weather::ColdWinter => "cold-winter",
            Weather::Rainy => "rainy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weather::HotSunny => "Hot & Sunny",
            Weather::WarmMild => "Warm & Mild",
            Weather::CoolBreezy => "Cool & Breezy",
            Weather::ColdWinter => "Cold & Winter",
            Weather::Rainy => "Rainy",
        }
    }
}

impl FromStr for Weather {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::unknown("weather", &s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CulturalPreference {
    Western,
    TraditionalIndian,
    ModestConservative,
    Bohemian,
    Minimalist,
    MixTraditionalModern,
}

impl CulturalPreference {
    pub const ALL: [CulturalPreference; 6] = [
        CulturalPreference::Western,
        CulturalPreference::TraditionalIndian,
        CulturalPreference::ModestConservative,
        CulturalPreference::Bohemian,
        CulturalPreference::Minimalist,
        CulturalPreference::MixTraditionalModern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CulturalPreference::Western => "western",
            CulturalPreference::TraditionalIndian => "traditional-indian",
            CulturalPreference::ModestConservative => "modest-conservative",
            CulturalPreference::Bohemian => "bohemian",
            CulturalPreference::Minimalist => "minimalist",
            CulturalPreference::MixTraditionalModern => "mix-traditional-modern",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CulturalPreference::Western => "Western Style",
            CulturalPreference::TraditionalIndian => "Traditional Indian",
            CulturalPreference::ModestConservative => "Modest/Conservative",
            CulturalPreference::Bohemian => "Bohemian",
            CulturalPreference::Minimalist => "Minimalist",
            CulturalPreference::MixTraditionalModern => "Mix Traditional & Modern",
        }
    }
}

impl FromStr for CulturalPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::unknown("style preference", &s))
    }
}

/// Form answers for the outfit advisor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRequest {
    /// Free-text occasion description; must be non-blank to analyze
    pub occasion: String,
    pub body_type: Option<BodyType>,
    pub weather: Option<Weather>,
    pub cultural_preference: Option<CulturalPreference>,
}

impl OutfitRequest {
    pub fn new(occasion: impl Into<String>) -> Self {
        Self {
            occasion: occasion.into(),
            ..Self::default()
        }
    }

    pub fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_cultural_preference(mut self, preference: CulturalPreference) -> Self {
        self.cultural_preference = Some(preference);
        self
    }

    pub fn has_occasion(&self) -> bool {
        !self.occasion.trim().is_empty()
    }
}
