use serde::{Deserialize, Serialize};

/// A validated application. Only lives for the request that carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub resume: String,
    pub cover_letter: Option<String>,
}

/// Output of the match-prediction collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPrediction {
    pub match_score: f64,
    pub reasons: String,
}

impl MatchPrediction {
    pub fn has_valid_score(&self) -> bool {
        self.match_score.is_finite() && (0.0..=1.0).contains(&self.match_score)
    }
}

/// Exactly the two text fields forwarded to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub job_description: String,
    pub resume: String,
}
