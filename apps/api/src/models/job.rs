use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::models::{CategorizedKeywords, JobDescriptionAttributes};

/// A job posting held by the job repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub attributes: JobDescriptionAttributes,
    /// Derived from `attributes` at creation; kept for display.
    pub keywords: CategorizedKeywords,
    /// "manual" or "generated".
    pub origin: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
