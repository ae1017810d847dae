//! Axum route handlers for applications and match prediction.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::applications::service::{apply_to_job, predict_match};
use crate::errors::AppError;
use crate::extract::{AppForm, AppJson};
use crate::models::{FormState, MatchPrediction};
use crate::state::AppState;
use crate::validation::RawForm;

/// Absent and `null` fields are treated as blank input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictMatchRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictMatchResponse {
    pub data: MatchPrediction,
}

/// POST /api/v1/applications
///
/// Acknowledges a form-encoded application. Nothing is stored.
pub async fn handle_apply(
    State(state): State<AppState>,
    AppForm(form): AppForm<RawForm>,
) -> (StatusCode, Json<FormState>) {
    let result = apply_to_job(&state.store, &form);
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result))
}

/// POST /api/v1/match
///
/// Scores a resume against a job description with the configured predictor.
pub async fn handle_predict_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<PredictMatchRequest>,
) -> Result<Json<PredictMatchResponse>, AppError> {
    let data = predict_match(
        state.predictor.as_ref(),
        request.job_description.as_deref().unwrap_or_default(),
        request.resume.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(PredictMatchResponse { data }))
}
