//! Job search: fetches candidate postings for a keyword query.
//!
//! `JobSource` is the seam; `JSearchClient` is the RapidAPI JSearch backend.
//! Missing or empty fields on a record fall back to fixed placeholders that
//! downstream renderers rely on.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::matching::error::MatchError;
use crate::models::job::JobPosting;

/// Number of leading keywords joined into the search query.
pub const QUERY_KEYWORDS: usize = 3;

pub const DEFAULT_TITLE: &str = "Job Title Not Available";
pub const DEFAULT_COMPANY: &str = "Company Not Available";
pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_APPLY_LINK: &str = "#";

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Returns every posting for `query`, or `NoJobsFound` when there are none.
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, MatchError>;
}

/// Joins the first three keywords with single spaces.
pub fn build_query(keywords: &[String]) -> Result<String, MatchError> {
    let query = keywords
        .iter()
        .take(QUERY_KEYWORDS)
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if query.is_empty() {
        return Err(MatchError::EmptyOrInvalidKeywords(
            "no keywords provided for job search".to_string(),
        ));
    }
    Ok(query)
}

/// Reads a string field, treating null, non-strings and blanks as missing.
fn text_field(record: &Value, key: &str, default: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}

pub fn posting_from_record(record: &Value) -> JobPosting {
    JobPosting {
        title: text_field(record, "job_title", DEFAULT_TITLE),
        company: text_field(record, "employer_name", DEFAULT_COMPANY),
        location: text_field(record, "job_city", DEFAULT_LOCATION),
        description: text_field(record, "job_description", DEFAULT_DESCRIPTION),
        apply_link: text_field(record, "job_apply_link", DEFAULT_APPLY_LINK),
    }
}

/// Maps a JSearch response body onto postings.
pub fn postings_from_body(body: &Value) -> Result<Vec<JobPosting>, MatchError> {
    let records = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            MatchError::JobSearchUnavailable(
                "invalid response from job search API: missing 'data' array".to_string(),
            )
        })?;

    if records.is_empty() {
        return Err(MatchError::NoJobsFound);
    }

    Ok(records.iter().map(posting_from_record).collect())
}

/// RapidAPI JSearch client. The API key is checked per call so the service
/// can start without one.
#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    api_key: Option<String>,
    host: String,
}

impl JSearchClient {
    pub fn new(
        api_key: Option<String>,
        host: String,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            host,
        })
    }

    fn search_url(&self) -> String {
        format!("https://{}/search", self.host)
    }
}

#[async_trait]
impl JobSource for JSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, MatchError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            MatchError::JobSearchUnavailable("job search API key is not configured".to_string())
        })?;

        debug!(query, "querying job search");

        let response = self
            .client
            .get(self.search_url())
            .query(&[("query", query), ("num_pages", "1")])
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await
            .map_err(|e| MatchError::JobSearchUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MatchError::JobSearchUnavailable(format!(
                "failed to fetch jobs: {status}"
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            MatchError::JobSearchUnavailable(format!("invalid response from job search API: {e}"))
        })?;

        let postings = postings_from_body(&body)?;
        info!(count = postings.len(), "fetched job postings");
        Ok(postings)
    }
}
