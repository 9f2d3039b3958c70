//! Health topics and their canned replies

use serde::{Deserialize, Serialize};

/// Topic a health question is classified into
///
/// Variants are listed in classification priority order; [`Topic::General`]
/// is the fallback when no keyword rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Periods, menstruation and cycle length
    Menstruation,
    /// Pain and cramp management
    Pain,
    /// When to see a doctor
    MedicalConcern,
    /// Intimate hygiene
    Hygiene,
    /// Mood and emotional health
    Mood,
    /// General wellness and lifestyle
    Wellness,
    /// Default supportive reply
    General,
}

impl Topic {
    /// All topics, highest priority first
    pub const ALL: [Topic; 7] = [
        Topic::Menstruation,
        Topic::Pain,
        Topic::MedicalConcern,
        Topic::Hygiene,
        Topic::Mood,
        Topic::Wellness,
        Topic::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Menstruation => "menstruation",
            Topic::Pain => "pain",
            Topic::MedicalConcern => "medical_concern",
            Topic::Hygiene => "hygiene",
            Topic::Mood => "mood",
            Topic::Wellness => "wellness",
            Topic::General => "general",
        }
    }

    /// Fixed reply for this topic
    pub fn response(&self) -> &'static str {
        match self {
            Topic::Menstruation => {
                "Menstrual cycles typically last 21-35 days, with bleeding for 3-7 days. It's normal to experience some cramping, mood changes, and breast tenderness. However, severe pain that interferes with daily activities, very heavy bleeding, or cycles shorter than 21 days or longer than 35 days should be discussed with a healthcare provider. Would you like specific tips for managing period symptoms?"
            }
            Topic::Pain => {
                "For menstrual cramps, try: applying heat to your lower abdomen, gentle exercise like walking or yoga, over-the-counter pain relievers (following package directions), staying hydrated, and getting enough rest. If pain is severe or doesn't improve with these methods, it's worth consulting a healthcare provider as it could indicate conditions like endometriosis."
            }
            Topic::MedicalConcern => {
                "You should consider seeing a healthcare provider if you experience: severe or worsening pain, very heavy bleeding (changing pads/tampons every hour), bleeding between periods, missed periods (if not pregnant), severe mood changes, signs of infection (unusual discharge, fever, pelvic pain), or any symptoms that worry you. Trust your instincts - you know your body best!"
            }
            Topic::Hygiene => {
                "Good intimate hygiene includes: washing with warm water and mild, unscented soap externally only, changing underwear daily (cotton is breathable), avoiding douching or harsh products, changing pads/tampons regularly during your period, and wiping front to back. Remember, the vagina is self-cleaning, so gentle external care is usually all that's needed."
            }
            Topic::Mood => {
                "Hormonal changes during your cycle can affect mood - this is completely normal! Some tips: maintain regular sleep and exercise routines, eat nutritious foods, practice stress management techniques like deep breathing or meditation, stay connected with supportive people, and consider tracking your cycle to identify patterns. If mood changes significantly impact your life, speaking with a healthcare provider or counselor can be very helpful."
            }
            Topic::Wellness => {
                "For overall women's wellness: eat a balanced diet rich in iron and calcium, stay hydrated, exercise regularly (even light activity helps), get adequate sleep (7-9 hours), manage stress, avoid smoking, limit alcohol, practice safe sun exposure, and maintain regular check-ups with healthcare providers. Remember, small consistent habits make a big difference in how you feel!"
            }
            Topic::General => {
                "Thank you for sharing that with me. Women's health encompasses many aspects, and it's great that you're taking an active interest in your wellbeing. While I can provide general information and support, remember that every person is unique. If you have specific concerns or symptoms that worry you, it's always best to consult with a healthcare provider who can give you personalized advice. Is there anything specific you'd like to know more about?"
            }
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_topic_has_distinct_response() {
        let responses: HashSet<_> = Topic::ALL.iter().map(|t| t.response()).collect();
        assert_eq!(responses.len(), Topic::ALL.len());
        assert!(responses.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn test_general_is_last() {
        assert_eq!(Topic::ALL.last(), Some(&Topic::General));
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&Topic::MedicalConcern).unwrap();
        assert_eq!(json, "\"medical_concern\"");
    }
}
