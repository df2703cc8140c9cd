use std::sync::Arc;

use crate::authoring::writer::JobDescriptionWriter;
use crate::config::Config;
use crate::matching::RankingOptions;
use crate::repositories::{
    AnalyticsRepository, FeedbackRepository, JobRepository, ResumeRepository,
};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable posting writer. Default: LlmJobWriter.
    pub writer: Arc<dyn JobDescriptionWriter>,
    /// Tier thresholds and scoring parallelism for every ranking run.
    pub ranking: RankingOptions,
    pub jobs: JobRepository,
    pub feedback: FeedbackRepository,
    pub resumes: ResumeRepository,
    pub analytics: AnalyticsRepository,
}

impl AppState {
    pub fn new(config: &Config, writer: Arc<dyn JobDescriptionWriter>) -> Self {
        let ranking = RankingOptions {
            thresholds: config.thresholds,
            parallel: config.parallel_scoring,
        };
        Self {
            writer,
            ranking,
            jobs: JobRepository::new(),
            feedback: FeedbackRepository::new(),
            resumes: ResumeRepository::new(),
            analytics: AnalyticsRepository::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::authoring::writer::{GeneratedDescription, JobBrief};
    use crate::errors::AppError;
    use crate::matching::models::MatchThresholds;

    struct NoopWriter;

    #[async_trait]
    impl JobDescriptionWriter for NoopWriter {
        async fn write(&self, _brief: &JobBrief) -> Result<GeneratedDescription, AppError> {
            Err(AppError::Validation("not used".to_string()))
        }
    }

    #[test]
    fn test_ranking_options_come_from_config() {
        let config = Config {
            anthropic_api_key: "test-key".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            parallel_scoring: true,
            thresholds: MatchThresholds::new(0.6, 0.3).unwrap(),
        };
        let state = AppState::new(&config, Arc::new(NoopWriter));
        assert!(state.ranking.parallel);
        assert_eq!(state.ranking.thresholds, config.thresholds);
    }
}
