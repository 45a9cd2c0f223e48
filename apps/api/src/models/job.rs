use serde::{Deserialize, Serialize};

/// A single job listing as returned by the job-search source.
/// No identity beyond its fields; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
}

/// A posting plus its relevance score for one ranking pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredJobPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub score: usize,
}
