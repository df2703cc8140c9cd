use anyhow::{bail, Context, Result};

use crate::matching::models::MatchThresholds;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub parallel_scoring: bool,
    pub thresholds: MatchThresholds,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchThresholds::default();
        let high = optional_env("MATCH_HIGH_THRESHOLD", defaults.high)?;
        let medium = optional_env("MATCH_MEDIUM_THRESHOLD", defaults.medium)?;
        let Some(thresholds) = MatchThresholds::new(high, medium) else {
            bail!("Match thresholds must satisfy 0 <= medium ({medium}) <= high ({high}) <= 1");
        };

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: optional_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            parallel_scoring: optional_env("PARALLEL_SCORING", false)?,
            thresholds,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
