use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Which oracle backend answers chat requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleProvider {
    /// Anthropic Messages API. Needs `ANTHROPIC_API_KEY`.
    Anthropic,
    /// Any chat proxy that accepts the message list and replies with either a
    /// raw string or `{"message": {"content": ...}}`. Needs `ORACLE_PROXY_URL`.
    Proxy,
}

/// Application configuration loaded from environment variables.
///
/// Oracle and job-search credentials are optional here: a missing oracle key
/// keeps the oracle permanently not-ready, and a missing RapidAPI key makes
/// job search report itself unavailable at call time.
#[derive(Debug, Clone)]
pub struct Config {
    pub oracle_provider: OracleProvider,
    pub anthropic_api_key: Option<String>,
    pub oracle_proxy_url: Option<String>,
    pub rapidapi_key: Option<String>,
    pub jsearch_host: String,
    pub oracle_timeout: Duration,
    pub job_search_timeout: Duration,
    pub oracle_ready_grace: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let oracle_provider = match optional_env("ORACLE_PROVIDER").as_deref() {
            None | Some("anthropic") => OracleProvider::Anthropic,
            Some("proxy") => OracleProvider::Proxy,
            Some(other) => bail!("ORACLE_PROVIDER must be 'anthropic' or 'proxy', got '{other}'"),
        };

        Ok(Config {
            oracle_provider,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            oracle_proxy_url: optional_env("ORACLE_PROXY_URL"),
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            jsearch_host: optional_env("JSEARCH_HOST")
                .unwrap_or_else(|| "jsearch.p.rapidapi.com".to_string()),
            oracle_timeout: Duration::from_secs(parse_env("ORACLE_TIMEOUT_SECS", 120)?),
            job_search_timeout: Duration::from_secs(parse_env("JOB_SEARCH_TIMEOUT_SECS", 30)?),
            oracle_ready_grace: Duration::from_millis(parse_env("ORACLE_READY_GRACE_MS", 2000)?),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Config with every credential present and no readiness grace period.
    pub fn for_tests() -> Self {
        Config {
            oracle_provider: OracleProvider::Anthropic,
            anthropic_api_key: Some("test-key".to_string()),
            oracle_proxy_url: None,
            rapidapi_key: Some("test-rapidapi-key".to_string()),
            jsearch_host: "jsearch.p.rapidapi.com".to_string(),
            oracle_timeout: Duration::from_secs(5),
            job_search_timeout: Duration::from_secs(5),
            oracle_ready_grace: Duration::from_millis(0),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
