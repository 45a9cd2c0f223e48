mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, OracleProvider};
use crate::llm_client::{LlmClient, Oracle, OracleReadiness, ProxyOracle};
use crate::matching::job_search::JSearchClient;
use crate::routes::build_router;
use crate::state::AppState;

/// Stand-in used until (or unless) a real oracle is configured. Requests never
/// reach it because readiness stays false.
struct UnconfiguredOracle;

#[async_trait::async_trait]
impl Oracle for UnconfiguredOracle {
    async fn chat(
        &self,
        _request: &llm_client::ChatRequest,
    ) -> Result<llm_client::OracleReply, llm_client::LlmError> {
        Err(llm_client::LlmError::EmptyContent)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Match API v{}", env!("CARGO_PKG_VERSION"));

    let readiness = OracleReadiness::new();
    let oracle = init_oracle(&config, &readiness)?;

    {
        let readiness = readiness.clone();
        tokio::spawn(async move {
            readiness.wait_ready().await;
            info!("Oracle ready");
        });
    }

    let job_source = JSearchClient::new(
        config.rapidapi_key.clone(),
        config.jsearch_host.clone(),
        config.job_search_timeout,
    )
    .context("failed to build job search HTTP client")?;
    if config.rapidapi_key.is_none() {
        warn!("RAPIDAPI_KEY not set; job recommendations will report job search unavailable");
    }

    let state = AppState {
        oracle,
        job_source: Arc::new(job_source),
        readiness,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the web frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the configured oracle backend and resolves readiness once it exists.
/// Missing credentials leave readiness unresolved so requests fail fast with
/// `OracleNotReady` instead of the process refusing to start.
fn init_oracle(config: &Config, readiness: &OracleReadiness) -> Result<Arc<dyn Oracle>> {
    let oracle: Arc<dyn Oracle> = match config.oracle_provider {
        OracleProvider::Anthropic => match &config.anthropic_api_key {
            Some(key) => {
                let client = LlmClient::new(key.clone(), config.oracle_timeout)
                    .context("failed to build LLM HTTP client")?;
                info!("LLM client initialized (model: {})", llm_client::MODEL);
                Arc::new(client)
            }
            None => {
                warn!("ANTHROPIC_API_KEY not set; oracle-backed endpoints will report not ready");
                return Ok(Arc::new(UnconfiguredOracle));
            }
        },
        OracleProvider::Proxy => match &config.oracle_proxy_url {
            Some(url) => {
                let client = ProxyOracle::new(url.clone(), config.oracle_timeout)
                    .context("failed to build oracle proxy HTTP client")?;
                info!("Oracle proxy initialized ({url})");
                Arc::new(client)
            }
            None => {
                warn!("ORACLE_PROXY_URL not set; oracle-backed endpoints will report not ready");
                return Ok(Arc::new(UnconfiguredOracle));
            }
        },
    };

    readiness.mark_ready();
    Ok(oracle)
}
