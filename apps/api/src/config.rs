use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Nothing is required: without `ANTHROPIC_API_KEY` match scoring runs on the
/// offline keyword backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: Option<String>,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: match optional_env("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL"),
            llm_timeout_secs: match optional_env("LLM_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_LLM_TIMEOUT_SECS,
            },
        })
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
