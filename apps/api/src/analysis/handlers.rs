//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::analyzer::{analyze_resume, AnalysisReport};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::matching::checklist::build_presence_checklist;
use crate::matching::handlers::ResumeTextRequest;
use crate::models::checklist::PresenceChecklistItem;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisReport,
    pub checklist: Vec<PresenceChecklistItem>,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/v1/analyze
///
/// The checklist is computed locally; only the review needs the oracle.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let checklist = build_presence_checklist(&request.resume_text);
    let oracle = state.ready_oracle().await?;
    let analysis = analyze_resume(&request.resume_text, oracle).await?;

    Ok(Json(AnalyzeResponse {
        analysis,
        checklist,
        analyzed_at: Utc::now(),
    }))
}
