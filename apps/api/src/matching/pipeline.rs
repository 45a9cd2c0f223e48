//! Recommendation pass: validate → extract keywords → search → rank.
//!
//! Steps run strictly in sequence because the keywords form the search query.

use serde::Serialize;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::llm_client::Oracle;
use crate::matching::error::MatchError;
use crate::matching::gate::validate_resume;
use crate::matching::job_search::{build_query, JobSource};
use crate::matching::keywords::{ensure_min_length, extract_keywords};
use crate::matching::ranker::rank_jobs;
use crate::models::job::ScoredJobPosting;

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub request_id: Uuid,
    pub keywords: Vec<String>,
    pub query: String,
    pub jobs: Vec<ScoredJobPosting>,
}

/// Runs one recommendation pass. The caller has already confirmed the oracle
/// is ready.
pub async fn recommend_jobs(
    resume_text: &str,
    oracle: &dyn Oracle,
    jobs: &dyn JobSource,
) -> Result<Recommendations, MatchError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("recommend", %request_id);
    run_pass(request_id, resume_text, oracle, jobs)
        .instrument(span)
        .await
}

async fn run_pass(
    request_id: Uuid,
    resume_text: &str,
    oracle: &dyn Oracle,
    jobs: &dyn JobSource,
) -> Result<Recommendations, MatchError> {
    ensure_min_length(resume_text)?;
    validate_resume(resume_text, oracle).await?;

    let keywords = extract_keywords(resume_text, oracle).await?;
    let query = build_query(&keywords)?;
    let postings = jobs.search(&query).await?;
    if postings.is_empty() {
        return Err(MatchError::NoJobsFound);
    }

    let ranked = rank_jobs(resume_text, postings);
    info!(
        jobs = ranked.len(),
        top_score = ranked.first().map(|j| j.score).unwrap_or(0),
        "recommendation pass complete"
    );

    Ok(Recommendations {
        request_id,
        keywords,
        query,
        jobs: ranked,
    })
}
