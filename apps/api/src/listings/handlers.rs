//! Axum route handlers for the Listings API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::{AppForm, AppPath, AppQuery};
use crate::listings::service::post_job;
use crate::models::{EmploymentType, FormState, Job, JobFilters, JOB_CATEGORIES};
use crate::state::AppState;
use crate::validation::RawForm;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOptionsResponse {
    pub categories: &'static [&'static str],
    pub employment_types: Vec<&'static str>,
}

/// GET /api/v1/jobs
///
/// Lists jobs matching the optional `query`, `location`, `category` and
/// `employmentType` parameters, newest first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(filters): AppQuery<JobFilters>,
) -> Json<Vec<Job>> {
    Json(state.store.list(Some(&filters)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Job>, AppError> {
    state
        .store
        .get_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/v1/jobs
///
/// Form-encoded posting. 201 with the new job id, or 422 with field errors.
pub async fn handle_post_job(
    State(state): State<AppState>,
    AppForm(form): AppForm<RawForm>,
) -> (StatusCode, Json<FormState>) {
    let result = post_job(&state.store, &form);
    let status = if result.success {
        StatusCode::CREATED
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result))
}

/// GET /api/v1/job-options
///
/// Allowed categories and employment types, for building posting forms.
pub async fn handle_job_options() -> Json<JobOptionsResponse> {
    Json(JobOptionsResponse {
        categories: JOB_CATEGORIES,
        employment_types: EmploymentType::ALL.iter().map(|t| t.as_str()).collect(),
    })
}
