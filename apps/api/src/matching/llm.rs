use async_trait::async_trait;

use super::prompts::{MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM_ROLE};
use super::{MatchError, MatchPredictor};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::{MatchPrediction, MatchRequest};

/// Semantic match scoring via Claude. One call per prediction.
pub struct LlmMatchPredictor {
    llm: LlmClient,
    system: String,
}

impl LlmMatchPredictor {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: format!("{MATCH_SYSTEM_ROLE} {JSON_ONLY_SYSTEM}"),
        }
    }
}

pub(crate) fn build_prompt(request: &MatchRequest) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{job_description}", &request.job_description)
        .replace("{resume}", &request.resume)
}

#[async_trait]
impl MatchPredictor for LlmMatchPredictor {
    async fn predict(&self, request: &MatchRequest) -> Result<MatchPrediction, MatchError> {
        let prompt = build_prompt(request);
        let prediction = self
            .llm
            .call_json::<MatchPrediction>(&prompt, &self.system)
            .await?;
        Ok(prediction)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}
