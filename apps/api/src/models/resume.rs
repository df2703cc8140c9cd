use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::models::CandidateAttributes;

/// A batch of candidate rows uploaded together for ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePool {
    pub id: Uuid,
    pub name: Option<String>,
    pub candidates: Vec<CandidateAttributes>,
    pub created_at: DateTime<Utc>,
}
