use axum::{extract::State, Json};

use crate::models::analytics::AnalyticsSnapshot;
use crate::state::AppState;

/// GET /api/v1/analytics
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsSnapshot> {
    let feedback = state.feedback.rating_summary().await;
    Json(state.analytics.snapshot(feedback).await)
}
