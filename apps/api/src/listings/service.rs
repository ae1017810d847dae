use tracing::info;

use crate::listings::store::JobStore;
use crate::models::FormState;
use crate::validation::{validate_job_posting, RawForm};

/// Validates a posting form and, if valid, stores the listing.
/// Nothing is inserted when any field fails.
pub fn post_job(store: &JobStore, form: &RawForm) -> FormState {
    let new_job = match validate_job_posting(form) {
        Ok(new_job) => new_job,
        Err(errors) => {
            info!(fields = errors.len(), "job posting rejected by validation");
            return FormState::invalid(errors);
        }
    };

    let job = store.insert(new_job);
    info!(job_id = %job.id, title = %job.title, "job posted");

    FormState::succeeded(format!("Job \"{}\" posted successfully!", job.title)).with_job_id(job.id)
}
