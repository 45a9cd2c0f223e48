pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/recommendations",
            post(matching::handle_recommendations),
        )
        .route("/api/v1/keywords", post(matching::handle_keywords))
        .route("/api/v1/rank", post(matching::handle_rank))
        .route("/api/v1/checklist", post(matching::handle_checklist))
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .with_state(state)
}
