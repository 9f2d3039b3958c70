//! Experience parameters — simulated latency for each experience.
//!
//! [`ExperienceParams`] groups the static timings used by the chat session
//! and the two advisors. These are application-layer concerns, not domain
//! policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated latency settings.
///
/// | Experience | Delay |
/// |------------|-------|
/// | Chat reply | uniform in `[reply_delay_min, reply_delay_max)` |
/// | Skin analysis | fixed `skin_analysis_delay` |
/// | Outfit suggestions | fixed `outfit_delay` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceParams {
    pub reply_delay_min: Duration,
    pub reply_delay_max: Duration,
    pub skin_analysis_delay: Duration,
    pub outfit_delay: Duration,
}

impl Default for ExperienceParams {
    fn default() -> Self {
        Self {
            reply_delay_min: Duration::from_millis(1000),
            reply_delay_max: Duration::from_millis(3000),
            skin_analysis_delay: Duration::from_millis(2500),
            outfit_delay: Duration::from_millis(2000),
        }
    }
}

impl ExperienceParams {
    /// Every delay set to zero
    pub fn instant() -> Self {
        Self {
            reply_delay_min: Duration::ZERO,
            reply_delay_max: Duration::ZERO,
            skin_analysis_delay: Duration::ZERO,
            outfit_delay: Duration::ZERO,
        }
    }

    pub fn with_reply_delay(mut self, min: Duration, max: Duration) -> Self {
        self.reply_delay_min = min;
        self.reply_delay_max = max;
        self
    }

    pub fn with_skin_analysis_delay(mut self, delay: Duration) -> Self {
        self.skin_analysis_delay = delay;
        self
    }

    pub fn with_outfit_delay(mut self, delay: Duration) -> Self {
        self.outfit_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ExperienceParams::default();
        assert_eq!(params.reply_delay_min, Duration::from_millis(1000));
        assert_eq!(params.reply_delay_max, Duration::from_millis(3000));
        assert_eq!(params.skin_analysis_delay, Duration::from_millis(2500));
        assert_eq!(params.outfit_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_builder() {
        let params = ExperienceParams::default()
            .with_reply_delay(Duration::from_millis(10), Duration::from_millis(20))
            .with_outfit_delay(Duration::from_millis(5));

        assert_eq!(params.reply_delay_min, Duration::from_millis(10));
        assert_eq!(params.reply_delay_max, Duration::from_millis(20));
        assert_eq!(params.outfit_delay, Duration::from_millis(5));
        assert_eq!(params.skin_analysis_delay, Duration::from_millis(2500));
    }

    #[test]
    fn test_instant() {
        let params = ExperienceParams::instant();
        assert!(params.reply_delay_max.is_zero());
        assert!(params.skin_analysis_delay.is_zero());
    }
}
