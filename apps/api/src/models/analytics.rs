use serde::{Deserialize, Serialize};

use crate::models::feedback::RatingSummary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub jobs_created: usize,
    pub descriptions_generated: usize,
    pub rankings_run: usize,
    pub candidates_scored: usize,
    pub candidates_excluded: usize,
    pub tiers: TierCounts,
    /// Mean of every top-ranked candidate's score across runs.
    pub average_top_score: Option<f64>,
    pub feedback: RatingSummary,
}
