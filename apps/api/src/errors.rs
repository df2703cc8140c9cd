use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The matching core never produces these: scoring degrades to zero instead
/// of failing. They cover request validation, lookups and model calls.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The language model request failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("job".into()).parts().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("bad".into()).parts().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Llm("down".into()).parts().0, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_llm_error_message_is_not_leaked() {
        let (_, code, message) = AppError::Llm("api key sk-123 rejected".into()).parts();
        assert_eq!(code, "LLM_ERROR");
        assert!(!message.contains("sk-123"));
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let (_, code, message) = AppError::Validation("rating must be 1-5".into()).parts();
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(message, "rating must be 1-5");
    }
}
