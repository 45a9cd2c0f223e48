//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::matching::checklist::build_presence_checklist;
use crate::matching::gate::looks_like_resume;
use crate::matching::keywords::extract_keywords;
use crate::matching::pipeline::{recommend_jobs, Recommendations};
use crate::matching::ranker::rank_jobs;
use crate::models::checklist::PresenceChecklistItem;
use crate::models::job::{JobPosting, ScoredJobPosting};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub resume_text: String,
    pub postings: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub jobs: Vec<ScoredJobPosting>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub looks_like_resume: bool,
    pub checklist: Vec<PresenceChecklistItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Full pass: classify the resume, extract keywords, search jobs, rank them.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeTextRequest>,
) -> Result<Json<Recommendations>, AppError> {
    let oracle = state.ready_oracle().await?;
    let recommendations =
        recommend_jobs(&request.resume_text, oracle, state.job_source.as_ref()).await?;
    Ok(Json(recommendations))
}

/// POST /api/v1/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeTextRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let oracle = state.ready_oracle().await?;
    let keywords = extract_keywords(&request.resume_text, oracle).await?;
    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/v1/rank
///
/// Ranks caller-supplied postings. No oracle, no network.
pub async fn handle_rank(AppJson(request): AppJson<RankRequest>) -> Json<RankResponse> {
    Json(RankResponse {
        jobs: rank_jobs(&request.resume_text, request.postings),
    })
}

/// POST /api/v1/checklist
pub async fn handle_checklist(
    AppJson(request): AppJson<ResumeTextRequest>,
) -> Json<ChecklistResponse> {
    Json(ChecklistResponse {
        looks_like_resume: looks_like_resume(&request.resume_text),
        checklist: build_presence_checklist(&request.resume_text),
    })
}
