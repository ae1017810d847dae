pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::applications::handlers as applications;
use crate::errors::AppError;
use crate::listings::handlers as listings;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listings API
        .route(
            "/api/v1/jobs",
            get(listings::handle_list_jobs).post(listings::handle_post_job),
        )
        .route("/api/v1/jobs/:id", get(listings::handle_get_job))
        .route("/api/v1/job-options", get(listings::handle_job_options))
        // Applications API
        .route(
            "/api/v1/applications",
            axum::routing::post(applications::handle_apply),
        )
        .route(
            "/api/v1/match",
            axum::routing::post(applications::handle_predict_match),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Converts a handler panic into the generic internal-error response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
