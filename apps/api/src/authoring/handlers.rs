//! Axum route handlers for job postings: manual entry, generation, feedback.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::authoring::writer::{GeneratedDescription, JobBrief};
use crate::errors::AppError;
use crate::matching::models::JobDescriptionAttributes;
use crate::models::feedback::FeedbackRow;
use crate::models::job::JobPosting;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub job_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateJobResponse {
    pub job: JobPosting,
    pub generated: GeneratedDescription,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs
///
/// Stores a posting written elsewhere. Skills and tools are derived from the
/// description by dictionary lookup.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let attributes =
        JobDescriptionAttributes::from_description(&request.description, request.job_type);
    let job = state
        .jobs
        .insert(request.title, request.description, attributes, "manual")
        .await;
    state.analytics.record_job_created().await;

    Ok((StatusCode::CREATED, Json(job)))
}

/// POST /api/v1/jobs/generate
///
/// Brief → writer backend → stored posting. The ranking attributes come from
/// the brief itself, not from the generated prose.
pub async fn handle_generate_job(
    State(state): State<AppState>,
    Json(brief): Json<JobBrief>,
) -> Result<(StatusCode, Json<GenerateJobResponse>), AppError> {
    if brief.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if brief.skills.trim().is_empty() && brief.tools.trim().is_empty() {
        return Err(AppError::Validation(
            "at least one of skills or tools is required".to_string(),
        ));
    }

    let generated = state.writer.write(&brief).await?;

    let title = if generated.title.trim().is_empty() {
        brief.title.clone()
    } else {
        generated.title.clone()
    };
    let job = state
        .jobs
        .insert(
            title,
            generated.description_markdown.clone(),
            brief.attributes(),
            "generated",
        )
        .await;
    state.analytics.record_generation().await;
    state.analytics.record_job_created().await;
    info!("Stored generated job {}", job.id);

    Ok((
        StatusCode::CREATED,
        Json(GenerateJobResponse { job, generated }),
    ))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.jobs.list().await)
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .jobs
        .get(job_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

/// POST /api/v1/jobs/:id/feedback
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackRow>), AppError> {
    if !(1..=5).contains(&request.rating) {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    if state.jobs.get(job_id).await.is_none() {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }

    let comment = request
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    let row = state.feedback.record(job_id, request.rating, comment).await;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/jobs/:id/feedback
pub async fn handle_list_feedback(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<FeedbackRow>>, AppError> {
    if state.jobs.get(job_id).await.is_none() {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    Ok(Json(state.feedback.for_job(job_id).await))
}

#[derive(Debug, Deserialize)]
pub struct UpdateDescriptionRequest {
    pub description: String,
}

/// PUT /api/v1/jobs/:id/description
///
/// Replaces the posting text after a recruiter edit. Ranking attributes are
/// kept as they were so earlier rankings stay comparable.
pub async fn handle_update_description(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<UpdateDescriptionRequest>,
) -> Result<Json<JobPosting>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    state
        .jobs
        .update_description(job_id, request.description)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}
