//! Analyze Skin use case
//!
//! Waits the configured analysis delay, then returns the skincare routine
//! for a questionnaire.

use super::shared::{AdvisorError, InFlight};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{AnalysisKind, NoProgress, ProgressNotifier};
use crate::ports::timing::Timer;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use wellness_domain::{SkinAnalysis, SkincareProfile};

/// Use case for the skincare guide
pub struct AnalyzeSkinUseCase {
    timer: Arc<dyn Timer>,
    delay: Duration,
    in_flight: InFlight,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeSkinUseCase {
    pub fn new(timer: Arc<dyn Timer>, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            in_flight: InFlight::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Whether an analysis is running
    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, profile: &SkincareProfile) -> Result<SkinAnalysis, AdvisorError> {
        self.execute_with_progress(profile, &NoProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        profile: &SkincareProfile,
        progress: &dyn ProgressNotifier,
    ) -> Result<SkinAnalysis, AdvisorError> {
        let Some(skin_type) = profile.skin_type else {
            return Err(AdvisorError::MissingSkinType);
        };
        let _guard = self.in_flight.acquire()?;

        info!(
            "Analyzing {} skin with {} concern(s)",
            skin_type,
            profile.concerns.len()
        );
        progress.on_analysis_start(AnalysisKind::SkinAnalysis);
        self.timer.sleep(self.delay).await;

        let analysis = SkinAnalysis::for_profile(profile);
        progress.on_analysis_complete(AnalysisKind::SkinAnalysis, true);

        self.conversation_logger.log(ConversationEvent::new(
            "skin_analysis",
            serde_json::json!({
                "profile": profile,
                "skin_type": analysis.skin_type,
            }),
        ));

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;
    use wellness_domain::{SkinConcern, SkinType};

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

    #[derive(Default)]
    struct GatedTimer {
        gate: Notify,
    }

    #[async_trait]
    impl Timer for GatedTimer {
        async fn sleep(&self, _duration: Duration) {
            self.gate.notified().await;
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_analysis_start(&self, kind: AnalysisKind) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}", kind.as_str()));
        }

        fn on_analysis_complete(&self, kind: AnalysisKind, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("complete:{}:{}", kind.as_str(), success));
        }
    }

    #[tokio::test]
    async fn test_analysis_waits_configured_delay() {
        let timer = Arc::new(RecordingTimer::default());
        let use_case = AnalyzeSkinUseCase::new(timer.clone(), Duration::from_millis(2500));
        let profile = SkincareProfile::new(SkinType::Sensitive)
            .with_concern(SkinConcern::Sensitivity);

        let analysis = use_case.execute(&profile).await.unwrap();

        assert_eq!(analysis.skin_type, SkinType::Sensitive);
        assert_eq!(analysis.concerns, vec![SkinConcern::Sensitivity]);
        assert_eq!(
            timer.waits.lock().unwrap().as_slice(),
            &[Duration::from_millis(2500)]
        );
        assert!(!use_case.is_analyzing());
    }

    #[tokio::test]
    async fn test_missing_skin_type_rejected() {
        let timer = Arc::new(RecordingTimer::default());
        let use_case = AnalyzeSkinUseCase::new(timer.clone(), Duration::from_millis(2500));

        let err = use_case
            .execute(&SkincareProfile::default())
            .await
            .unwrap_err();
        assert_eq!(err, AdvisorError::MissingSkinType);
        assert!(timer.waits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_progress_reported() {
        let use_case =
            AnalyzeSkinUseCase::new(Arc::new(RecordingTimer::default()), Duration::ZERO);
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(&SkincareProfile::new(SkinType::Dry), &progress)
            .await
            .unwrap();

        assert_eq!(
            progress.events.lock().unwrap().as_slice(),
            &["start:skin_analysis", "complete:skin_analysis:true"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_analysis_is_busy() {
        let timer = Arc::new(GatedTimer::default());
        let use_case = Arc::new(AnalyzeSkinUseCase::new(timer.clone(), Duration::ZERO));
        let profile = SkincareProfile::new(SkinType::Oily);

        let first = {
            let use_case = use_case.clone();
            let profile = profile.clone();
            tokio::spawn(async move { use_case.execute(&profile).await })
        };
        while !use_case.is_analyzing() {
            tokio::task::yield_now().await;
        }

        assert_eq!(
            use_case.execute(&profile).await.unwrap_err(),
            AdvisorError::Busy
        );

        timer.gate.notify_one();
        assert!(first.await.unwrap().is_ok());
        assert!(!use_case.is_analyzing());
    }
}
