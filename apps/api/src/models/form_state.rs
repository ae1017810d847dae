use serde::Serialize;

use crate::validation::FieldErrors;

pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed. Please check your input.";

/// Outcome of a form action, rendered as-is to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl FormState {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            job_id: None,
            errors: None,
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            job_id: None,
            errors: Some(errors),
        }
    }

    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }
}
