use std::sync::Arc;

use tokio::sync::RwLock;

use crate::matching::models::RankingResult;
use crate::models::analytics::{AnalyticsSnapshot, TierCounts};
use crate::models::feedback::RatingSummary;

#[derive(Debug, Default)]
struct Counters {
    jobs_created: usize,
    descriptions_generated: usize,
    rankings_run: usize,
    candidates_scored: usize,
    candidates_excluded: usize,
    tiers: TierCounts,
    top_score_sum: f64,
    top_score_runs: usize,
}

#[derive(Clone, Default)]
pub struct AnalyticsRepository {
    counters: Arc<RwLock<Counters>>,
}

impl AnalyticsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_job_created(&self) {
        self.counters.write().await.jobs_created += 1;
    }

    pub async fn record_generation(&self) {
        self.counters.write().await.descriptions_generated += 1;
    }

    pub async fn record_ranking(&self, result: &RankingResult) {
        let mut c = self.counters.write().await;
        c.rankings_run += 1;
        c.candidates_scored += result.len();
        c.candidates_excluded += result.excluded.len();
        c.tiers.high += result.high().len();
        c.tiers.medium += result.medium().len();
        c.tiers.low += result.low().len();
        if let Some(top) = result.ranked().first() {
            c.top_score_sum += top.score;
            c.top_score_runs += 1;
        }
    }

    /// Feedback lives in its own repository; the caller passes its summary in.
    pub async fn snapshot(&self, feedback: RatingSummary) -> AnalyticsSnapshot {
        let c = self.counters.read().await;
        AnalyticsSnapshot {
            jobs_created: c.jobs_created,
            descriptions_generated: c.descriptions_generated,
            rankings_run: c.rankings_run,
            candidates_scored: c.candidates_scored,
            candidates_excluded: c.candidates_excluded,
            tiers: c.tiers,
            average_top_score: (c.top_score_runs > 0)
                .then(|| c.top_score_sum / c.top_score_runs as f64),
            feedback,
        }
    }
}
