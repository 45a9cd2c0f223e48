use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{Oracle, OracleReadiness};
use crate::matching::error::MatchError;
use crate::matching::job_search::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<dyn Oracle>,
    pub job_source: Arc<dyn JobSource>,
    pub readiness: OracleReadiness,
    pub config: Config,
}

impl AppState {
    /// Waits up to the configured grace period for the oracle, then gives up
    /// with `OracleNotReady`.
    pub async fn ready_oracle(&self) -> Result<&dyn Oracle, AppError> {
        if self
            .readiness
            .ready_within(self.config.oracle_ready_grace)
            .await
        {
            Ok(self.oracle.as_ref())
        } else {
            Err(MatchError::OracleNotReady.into())
        }
    }
}
