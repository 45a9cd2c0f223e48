//! In-memory doubles for the oracle and the job source.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{
    ChatRequest, LlmError, Oracle, OracleReply, ReplyMessage, StructuredReply,
};
use crate::matching::error::MatchError;
use crate::matching::job_search::JobSource;
use crate::models::job::JobPosting;

/// Replays canned replies in order and records every request it receives.
/// Running out of replies is reported as `LlmError::EmptyContent`.
pub struct ScriptedOracle {
    replies: Mutex<VecDeque<Result<OracleReply, LlmError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedOracle {
    pub fn new(replies: Vec<Result<OracleReply, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| Ok(OracleReply::Text(t.to_string())))
                .collect(),
        )
    }

    pub fn with_structured(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| {
                    Ok(OracleReply::Structured(StructuredReply {
                        message: ReplyMessage {
                            content: t.to_string(),
                        },
                    }))
                })
                .collect(),
        )
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn chat(&self, request: &ChatRequest) -> Result<OracleReply, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

/// Serves a fixed posting list for any query.
pub struct StaticJobSource {
    postings: Vec<JobPosting>,
    queries: Mutex<Vec<String>>,
}

impl StaticJobSource {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self {
            postings,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, MatchError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.postings.is_empty() {
            return Err(MatchError::NoJobsFound);
        }
        Ok(self.postings.clone())
    }
}
