use std::sync::Arc;

use crate::listings::store::JobStore;
use crate::matching::MatchPredictor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one listing store for this process. Tests build their own.
    pub store: Arc<JobStore>,
    /// Pluggable match predictor. LLM-backed when an API key is configured.
    pub predictor: Arc<dyn MatchPredictor>,
}

impl AppState {
    pub fn new(store: JobStore, predictor: Arc<dyn MatchPredictor>) -> Self {
        Self {
            store: Arc::new(store),
            predictor,
        }
    }
}
