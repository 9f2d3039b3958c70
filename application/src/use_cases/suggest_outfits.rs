//! Suggest Outfits use case
//!
//! Waits the configured delay, then returns the outfit catalog for a
//! request with a described occasion.

use super::shared::{AdvisorError, InFlight};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{AnalysisKind, NoProgress, ProgressNotifier};
use crate::ports::timing::Timer;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use wellness_domain::core::string::preview;
use wellness_domain::style::suggest;
use wellness_domain::{OutfitRequest, OutfitSuggestion};

/// Use case for the dress confidence advisor
pub struct SuggestOutfitsUseCase {
    timer: Arc<dyn Timer>,
    delay: Duration,
    in_flight: InFlight,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SuggestOutfitsUseCase {
    pub fn new(timer: Arc<dyn Timer>, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            in_flight: InFlight::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_active()
    }

    pub async fn execute(
        &self,
        request: &OutfitRequest,
    ) -> Result<Vec<OutfitSuggestion>, AdvisorError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        request: &OutfitRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<OutfitSuggestion>, AdvisorError> {
        if !request.has_occasion() {
            return Err(AdvisorError::MissingOccasion);
        }
        let _guard = self.in_flight.acquire()?;

        info!("Suggesting outfits for: {}", preview(&request.occasion, 60));
        progress.on_analysis_start(AnalysisKind::OutfitSuggestions);
        self.timer.sleep(self.delay).await;

        let suggestions = suggest(request);
        progress.on_analysis_complete(AnalysisKind::OutfitSuggestions, true);

        self.conversation_logger.log(ConversationEvent::new(
            "outfit_suggestions",
            serde_json::json!({
                "request": request,
                "titles": suggestions.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            }),
        ));

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wellness_domain::{CulturalPreference, Weather};

    #[derive(Default)]
    struct RecordingTimer {
        waits: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Timer for RecordingTimer {
        async fn sleep(&self, duration: Duration) {
            self.waits.lock().unwrap().push(duration);
        }
    }

    #[tokio::test]
    async fn test_suggestions_after_delay() {
        let timer = Arc::new(RecordingTimer::default());
        let use_case = SuggestOutfitsUseCase::new(timer.clone(), Duration::from_millis(2000));
        let request = OutfitRequest::new("Job interview at a tech company")
            .with_weather(Weather::Rainy)
            .with_cultural_preference(CulturalPreference::Minimalist);

        let suggestions = use_case.execute(&request).await.unwrap();

        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].title, "Elegant Blazer Ensemble");
        assert_eq!(
            timer.waits.lock().unwrap().as_slice(),
            &[Duration::from_millis(2000)]
        );
    }

    #[tokio::test]
    async fn test_blank_occasion_rejected() {
        let timer = Arc::new(RecordingTimer::default());
        let use_case = SuggestOutfitsUseCase::new(timer.clone(), Duration::from_millis(2000));

        let err = use_case
            .execute(&OutfitRequest::new("   "))
            .await
            .unwrap_err();
        assert_eq!(err, AdvisorError::MissingOccasion);
        assert!(timer.waits.lock().unwrap().is_empty());
        assert!(!use_case.is_analyzing());
    }
}
