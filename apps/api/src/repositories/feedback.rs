use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::feedback::{FeedbackRow, RatingSummary};

#[derive(Clone, Default)]
pub struct FeedbackRepository {
    inner: Arc<RwLock<Vec<FeedbackRow>>>,
}

impl FeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rating. Range checks happen at the handler boundary.
    pub async fn record(&self, job_id: Uuid, rating: u8, comment: Option<String>) -> FeedbackRow {
        let row = FeedbackRow {
            id: Uuid::new_v4(),
            job_id,
            rating,
            comment,
            created_at: Utc::now(),
        };
        self.inner.write().await.push(row.clone());
        row
    }

    pub async fn for_job(&self, job_id: Uuid) -> Vec<FeedbackRow> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|f| f.job_id == job_id)
            .cloned()
            .collect()
    }

    pub async fn rating_summary(&self) -> RatingSummary {
        let rows = self.inner.read().await;
        let count = rows.len();
        let average = (count > 0)
            .then(|| rows.iter().map(|f| f64::from(f.rating)).sum::<f64>() / count as f64);
        RatingSummary { count, average }
    }
}
