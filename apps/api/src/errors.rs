use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::applications::service::{PredictMatchError, MISSING_MATCH_INPUT_MESSAGE};
use crate::matching::MatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Match prediction error: {0}")]
    Prediction(#[from] MatchError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Prediction(e) => {
                tracing::error!("Match prediction failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MATCH_PREDICTION_FAILED",
                    "Failed to predict job match. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred. Please try again.".to_string(),
                )
            }
        };

        error_response(status, code, &message)
    }
}

impl From<PredictMatchError> for AppError {
    fn from(value: PredictMatchError) -> Self {
        match value {
            PredictMatchError::MissingInput => {
                AppError::Validation(MISSING_MATCH_INPUT_MESSAGE.to_string())
            }
            PredictMatchError::Collaborator(e) => AppError::Prediction(e),
        }
    }
}

/// Renders the shared `{"error": {"code", "message"}}` body.
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = Json(json!({
        "error": {
            "code": code,
            "message": message
        }
    }));

    (status, body).into_response()
}
