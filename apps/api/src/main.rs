mod applications;
mod config;
mod errors;
mod extract;
mod listings;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::listings::store::JobStore;
use crate::llm_client::LlmClient;
use crate::matching::{KeywordMatchPredictor, LlmMatchPredictor, MatchPredictor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    // In-memory listings, reseeded on every start
    let store = JobStore::with_sample_jobs();
    info!("Listing store seeded with {} sample jobs", store.len());

    let predictor = build_predictor(&config)?;
    info!("Match predictor initialized (backend: {})", predictor.backend());

    let state = AppState::new(store, predictor);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Uses the LLM backend when an API key is configured, the keyword scorer otherwise.
fn build_predictor(config: &Config) -> Result<Arc<dyn MatchPredictor>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; match prediction falls back to keyword scoring");
        return Ok(Arc::new(KeywordMatchPredictor));
    };

    let llm = LlmClient::new(
        api_key,
        config.anthropic_api_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    Ok(Arc::new(LlmMatchPredictor::new(llm)))
}
