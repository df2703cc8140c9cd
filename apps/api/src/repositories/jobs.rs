use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::matching::extract_categorized_keywords;
use crate::matching::models::JobDescriptionAttributes;
use crate::models::job::JobPosting;

#[derive(Clone, Default)]
pub struct JobRepository {
    inner: Arc<RwLock<HashMap<Uuid, JobPosting>>>,
}

impl JobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new posting and returns it. Keywords are derived from the
    /// attributes' skills and tools text.
    pub async fn insert(
        &self,
        title: String,
        description: String,
        attributes: JobDescriptionAttributes,
        origin: &str,
    ) -> JobPosting {
        let now = Utc::now();
        let job = JobPosting {
            id: Uuid::new_v4(),
            title,
            description,
            keywords: extract_categorized_keywords(&format!(
                "{} {}",
                attributes.skills, attributes.tools
            )),
            attributes,
            origin: origin.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.insert(job.id, job.clone());
        job
    }

    pub async fn get(&self, id: Uuid) -> Option<JobPosting> {
        self.inner.read().await.get(&id).cloned()
    }

    /// All postings, newest first.
    pub async fn list(&self) -> Vec<JobPosting> {
        let mut jobs: Vec<JobPosting> = self.inner.read().await.values().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs
    }

    /// Replaces the description text. Attributes are left untouched so
    /// rankings against this job stay comparable.
    pub async fn update_description(&self, id: Uuid, description: String) -> Option<JobPosting> {
        let mut jobs = self.inner.write().await;
        let job = jobs.get_mut(&id)?;
        job.description = description;
        job.updated_at = Utc::now();
        Some(job.clone())
    }
}
