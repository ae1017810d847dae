//! Match prediction: a pluggable collaborator that scores a resume against a
//! job description.
//!
//! Default: `LlmMatchPredictor` when an Anthropic key is configured.
//! Fallback: `KeywordMatchPredictor` (pure-Rust, deterministic, offline).
//!
//! `AppState` holds an `Arc<dyn MatchPredictor>`, chosen at startup from config.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::{MatchPrediction, MatchRequest};

pub mod keyword;
pub mod llm;
pub mod prompts;

pub use keyword::KeywordMatchPredictor;
pub use llm::LlmMatchPredictor;

/// Failure reported by a predictor backend. Callers never show these details
/// to end users.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("match score {0} is outside [0, 1]")]
    ScoreOutOfRange(f64),
}

/// The match predictor trait. Implement this to swap backends without touching
/// the handler.
#[async_trait]
pub trait MatchPredictor: Send + Sync {
    async fn predict(&self, request: &MatchRequest) -> Result<MatchPrediction, MatchError>;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

/// Rejects predictions that do not carry a finite score in [0, 1]. Applied to
/// every backend's output by `predict_match`.
pub(crate) fn checked(prediction: MatchPrediction) -> Result<MatchPrediction, MatchError> {
    if prediction.has_valid_score() {
        Ok(prediction)
    } else {
        Err(MatchError::ScoreOutOfRange(prediction.match_score))
    }
}
