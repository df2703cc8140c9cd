pub mod analytics;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::authoring::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/keywords/extract",
            post(matching::handle_extract_keywords),
        )
        .route(
            "/api/v1/candidate-pools",
            post(matching::handle_create_pool),
        )
        .route(
            "/api/v1/candidate-pools/:id",
            get(matching::handle_get_pool),
        )
        .route("/api/v1/rankings", post(matching::handle_rank))
        // Authoring API
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/generate", post(jobs::handle_generate_job))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route(
            "/api/v1/jobs/:id/description",
            put(jobs::handle_update_description),
        )
        .route(
            "/api/v1/jobs/:id/feedback",
            get(jobs::handle_list_feedback).post(jobs::handle_submit_feedback),
        )
        .route("/api/v1/analytics", get(analytics::handle_analytics))
        .with_state(state)
}
