use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::matching::models::CandidateAttributes;
use crate::models::resume::CandidatePool;

#[derive(Clone, Default)]
pub struct ResumeRepository {
    pools: Arc<RwLock<HashMap<Uuid, CandidatePool>>>,
}

impl ResumeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_pool(
        &self,
        name: Option<String>,
        candidates: Vec<CandidateAttributes>,
    ) -> CandidatePool {
        let pool = CandidatePool {
            id: Uuid::new_v4(),
            name,
            candidates,
            created_at: Utc::now(),
        };
        self.pools.write().await.insert(pool.id, pool.clone());
        pool
    }

    pub async fn get_pool(&self, id: Uuid) -> Option<CandidatePool> {
        self.pools.read().await.get(&id).cloned()
    }
}
