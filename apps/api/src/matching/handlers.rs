//! Axum route handlers for keyword extraction, candidate pools and rankings.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::models::{
    CandidateAttributes, CategorizedKeywords, JobDescriptionAttributes, RankingResult,
};
use crate::matching::{extract_categorized_keywords, rank_candidates_with};
use crate::models::resume::CandidatePool;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePoolRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub candidates: Vec<CandidateAttributes>,
}

/// Exactly one of `job_id` / `job` and one of `pool_id` / `candidates`.
#[derive(Debug, Default, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub job_id: Option<Uuid>,
    #[serde(default)]
    pub job: Option<JobDescriptionAttributes>,
    #[serde(default)]
    pub pool_id: Option<Uuid>,
    #[serde(default)]
    pub candidates: Option<Vec<CandidateAttributes>>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub job_id: Option<Uuid>,
    pub pool_id: Option<Uuid>,
    pub ranking: RankingResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords/extract
pub async fn handle_extract_keywords(
    Json(request): Json<ExtractRequest>,
) -> Json<CategorizedKeywords> {
    Json(extract_categorized_keywords(&request.text))
}

/// POST /api/v1/candidate-pools
pub async fn handle_create_pool(
    State(state): State<AppState>,
    Json(request): Json<CreatePoolRequest>,
) -> Result<Json<CandidatePool>, AppError> {
    if request.candidates.is_empty() {
        return Err(AppError::Validation(
            "candidates cannot be empty".to_string(),
        ));
    }
    let pool = state
        .resumes
        .insert_pool(request.name, request.candidates)
        .await;
    Ok(Json(pool))
}

/// GET /api/v1/candidate-pools/:id
pub async fn handle_get_pool(
    State(state): State<AppState>,
    Path(pool_id): Path<Uuid>,
) -> Result<Json<CandidatePool>, AppError> {
    state
        .resumes
        .get_pool(pool_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate pool {pool_id} not found")))
}

/// POST /api/v1/rankings
///
/// Scores every candidate against the job and returns the top-3 shortlist
/// plus the high/medium/low tiers. Scoring runs off the async runtime.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let job = resolve_job(&state, request.job_id, request.job).await?;
    let candidates = resolve_candidates(&state, request.pool_id, request.candidates).await?;
    let options = state.ranking;

    let ranking = tokio::task::spawn_blocking(move || {
        rank_candidates_with(&job, &candidates, &options)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("ranking task failed: {e}")))?;

    state.analytics.record_ranking(&ranking).await;

    Ok(Json(RankResponse {
        job_id: request.job_id,
        pool_id: request.pool_id,
        ranking,
    }))
}

async fn resolve_job(
    state: &AppState,
    job_id: Option<Uuid>,
    inline: Option<JobDescriptionAttributes>,
) -> Result<JobDescriptionAttributes, AppError> {
    match (job_id, inline) {
        (Some(id), None) => state
            .jobs
            .get(id)
            .await
            .map(|job| job.attributes)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found"))),
        (None, Some(job)) => Ok(job),
        _ => Err(AppError::Validation(
            "provide exactly one of job_id or job".to_string(),
        )),
    }
}

async fn resolve_candidates(
    state: &AppState,
    pool_id: Option<Uuid>,
    inline: Option<Vec<CandidateAttributes>>,
) -> Result<Vec<CandidateAttributes>, AppError> {
    match (pool_id, inline) {
        (Some(id), None) => state
            .resumes
            .get_pool(id)
            .await
            .map(|pool| pool.candidates)
            .ok_or_else(|| AppError::NotFound(format!("Candidate pool {id} not found"))),
        (None, Some(candidates)) => Ok(candidates),
        _ => Err(AppError::Validation(
            "provide exactly one of pool_id or candidates".to_string(),
        )),
    }
}
