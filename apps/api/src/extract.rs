//! Request extractors whose rejections render as `AppError`, so malformed
//! requests get the same JSON error body as every other failure.

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

// Rejection text carries serde internals; it is logged, never returned.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("JSON body rejected: {rejection}");
        AppError::Validation("Request body must be a valid JSON object.".to_string())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!("form body rejected: {rejection}");
        AppError::Validation(
            "Request body must be form data (application/x-www-form-urlencoded).".to_string(),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("query string rejected: {rejection}");
        AppError::Validation("Invalid query parameters.".to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("path rejected: {rejection}");
        AppError::Validation("Invalid path parameter.".to_string())
    }
}
