//! Application intake and match prediction.
//!
//! Applications are acknowledged and logged, never stored. Match prediction is
//! independent of submission and may run any number of times.

use thiserror::Error;
use tracing::{info, warn};

use crate::listings::store::JobStore;
use crate::matching::{checked, MatchError, MatchPredictor};
use crate::models::{FormState, MatchPrediction, MatchRequest};
use crate::validation::{validate_application, FieldErrors, RawForm};

pub const MISSING_MATCH_INPUT_MESSAGE: &str = "Job description and resume text are required.";

/// Validates an application against the current listings and acknowledges it.
pub fn apply_to_job(store: &JobStore, form: &RawForm) -> FormState {
    let job = store.get_by_id(form.get("jobId").map(|v| v.trim()).unwrap_or_default());

    let submission = match validate_application(form) {
        Ok(submission) if job.is_some() => submission,
        result => {
            let mut errors = result.err().unwrap_or_else(FieldErrors::new);
            if job.is_none() {
                errors.add("jobId", "Job not found");
            }
            info!(fields = errors.len(), "application rejected by validation");
            return FormState::invalid(errors);
        }
    };

    let title = job.map(|j| j.title).unwrap_or_default();

    info!(
        job_id = %submission.job_id,
        name = %submission.name,
        email = %submission.email,
        resume_len = submission.resume.chars().count(),
        cover_letter_len = submission.cover_letter.as_ref().map(|c| c.chars().count()),
        "job application received"
    );

    FormState::succeeded(format!(
        "Successfully applied for \"{title}\"! You will hear back if selected."
    ))
}

#[derive(Debug, Error)]
pub enum PredictMatchError {
    #[error("job description and resume text are required")]
    MissingInput,

    #[error(transparent)]
    Collaborator(#[from] MatchError),
}

/// Forwards exactly the description and resume to the predictor. Blank input
/// is rejected before the predictor is called, and a score outside [0, 1] is
/// reported as a predictor failure whichever backend produced it.
pub async fn predict_match(
    predictor: &dyn MatchPredictor,
    job_description: &str,
    resume: &str,
) -> Result<MatchPrediction, PredictMatchError> {
    if job_description.trim().is_empty() || resume.trim().is_empty() {
        return Err(PredictMatchError::MissingInput);
    }

    let request = MatchRequest {
        job_description: job_description.to_string(),
        resume: resume.to_string(),
    };

    predictor.predict(&request).await.and_then(checked).map_err(|e| {
        warn!(backend = predictor.backend(), error = %e, "match prediction failed");
        PredictMatchError::Collaborator(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const RESUME: &str =
        "Senior frontend engineer with eight years of React, TypeScript and accessibility work.";

    fn application(job_id: &str, resume: &str) -> RawForm {
        [
            ("jobId", job_id),
            ("jobTitle", "ignored"),
            ("jobDescription", "ignored"),
            ("name", "Grace Hopper"),
            ("email", "grace@example.com"),
            ("resume", resume),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// Records every request and answers with a fixed result.
    struct RecordingPredictor {
        calls: AtomicUsize,
        last: Mutex<Option<MatchRequest>>,
        fail: bool,
    }

    impl RecordingPredictor {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                fail,
            }
        }
    }

    #[async_trait]
    impl MatchPredictor for RecordingPredictor {
        async fn predict(&self, request: &MatchRequest) -> Result<MatchPrediction, MatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if self.fail {
                return Err(MatchError::Llm(LlmError::EmptyContent));
            }
            Ok(MatchPrediction {
                match_score: 0.8,
                reasons: "Strong React overlap.".to_string(),
            })
        }

        fn backend(&self) -> &'static str {
            "recording"
        }
    }

    /// Answers every request with the same score.
    struct FixedScorePredictor(f64);

    #[async_trait]
    impl MatchPredictor for FixedScorePredictor {
        async fn predict(&self, _request: &MatchRequest) -> Result<MatchPrediction, MatchError> {
            Ok(MatchPrediction {
                match_score: self.0,
                reasons: "Fixed.".to_string(),
            })
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_short_resume_fails() {
        let store = JobStore::with_sample_jobs();
        let state = apply_to_job(&store, &application("1", "too short"));
        assert!(!state.success);
        assert!(state.errors.unwrap().contains("resume"));
    }

    #[test]
    fn test_valid_application_succeeds_without_touching_store() {
        let store = JobStore::with_sample_jobs();
        let before = store.list(None);
        let state = apply_to_job(&store, &application("1", RESUME));
        assert!(state.success, "{state:?}");
        assert_eq!(
            state.message,
            "Successfully applied for \"Software Engineer, Frontend\"! You will hear back if selected."
        );
        assert_eq!(store.list(None), before);
    }

    #[test]
    fn test_unknown_job_is_a_field_error() {
        let store = JobStore::with_sample_jobs();
        let state = apply_to_job(&store, &application("42", RESUME));
        assert!(!state.success);
        assert_eq!(state.errors.unwrap().get("jobId"), Some("Job not found"));
    }

    #[test]
    fn test_unknown_job_reported_alongside_other_errors() {
        let store = JobStore::with_sample_jobs();
        let state = apply_to_job(&store, &application("42", "short"));
        let errors = state.errors.unwrap();
        assert!(errors.contains("jobId"));
        assert!(errors.contains("resume"));
    }

    #[test]
    fn test_missing_job_id_keeps_required_message() {
        let store = JobStore::with_sample_jobs();
        let state = apply_to_job(&store, &application("", RESUME));
        assert_eq!(state.errors.unwrap().get("jobId"), Some("Job ID is required"));
    }

    #[tokio::test]
    async fn test_predict_with_empty_description_skips_collaborator() {
        let predictor = RecordingPredictor::new(false);
        let result = predict_match(&predictor, "", "some resume").await;
        assert!(matches!(result, Err(PredictMatchError::MissingInput)));
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);

        let result = predict_match(&predictor, "A description", "   ").await;
        assert!(matches!(result, Err(PredictMatchError::MissingInput)));
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_predict_forwards_exact_texts_and_relays_result() {
        let predictor = RecordingPredictor::new(false);
        let prediction = predict_match(&predictor, "React role", RESUME).await.unwrap();
        assert_eq!(prediction.match_score, 0.8);
        assert!((0.0..=1.0).contains(&prediction.match_score));
        assert_eq!(prediction.reasons, "Strong React overlap.");

        let sent = predictor.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.job_description, "React role");
        assert_eq!(sent.resume, RESUME);
    }

    #[tokio::test]
    async fn test_predict_collaborator_failure_is_wrapped() {
        let predictor = RecordingPredictor::new(true);
        let result = predict_match(&predictor, "React role", RESUME).await;
        assert!(matches!(result, Err(PredictMatchError::Collaborator(_))));
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_predict_can_run_repeatedly() {
        let predictor = RecordingPredictor::new(false);
        for _ in 0..3 {
            predict_match(&predictor, "React role", RESUME).await.unwrap();
        }
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_predict_out_of_range_score_is_collaborator_failure() {
        for score in [1.5, -0.2, f64::NAN] {
            let result = predict_match(&FixedScorePredictor(score), "React role", RESUME).await;
            assert!(
                matches!(
                    result,
                    Err(PredictMatchError::Collaborator(MatchError::ScoreOutOfRange(_)))
                ),
                "score {score} was accepted"
            );
        }
    }

    #[tokio::test]
    async fn test_predict_accepts_score_bounds() {
        for score in [0.0, 1.0] {
            let prediction = predict_match(&FixedScorePredictor(score), "React role", RESUME)
                .await
                .unwrap();
            assert_eq!(prediction.match_score, score);
        }
    }
}
