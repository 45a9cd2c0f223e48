//! Resume validity checks.
//!
//! `looks_like_resume` is a cheap vocabulary gate that runs before any oracle
//! call. `validate_resume` adds the oracle's classification on top: a failed
//! gate short-circuits without a network call, a verdict object from the
//! oracle is final unless it says `isResume: true` (a missing field counts as
//! "not a resume"), and anything else from the oracle (transport errors,
//! replies with no readable verdict) is logged and let through.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::llm_client::prompts::{truncate_chars, JSON_OBJECT};
use crate::llm_client::{ChatMessage, ChatRequest, ModelTier, Oracle};
use crate::matching::error::{MatchError, NOT_A_RESUME_MESSAGE};
use crate::matching::prompts::{CLASSIFY_PROMPT_MAX_CHARS, CLASSIFY_PROMPT_TEMPLATE};

const RESUME_VOCABULARY: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "work",
    "employment",
    "position",
    "company",
    "degree",
    "university",
    "college",
    "email",
    "phone",
    "contact",
];

/// Distinct vocabulary hits needed to pass the gate.
pub const MIN_VOCABULARY_HITS: usize = 3;

/// Counts distinct vocabulary words found as substrings, case-insensitively.
fn vocabulary_hits(text: &str) -> usize {
    let lowered = text.to_lowercase();
    RESUME_VOCABULARY
        .iter()
        .filter(|word| lowered.contains(*word))
        .count()
}

pub fn looks_like_resume(text: &str) -> bool {
    vocabulary_hits(text) >= MIN_VOCABULARY_HITS
}

#[derive(Debug, Deserialize)]
struct Classification {
    #[serde(rename = "isResume", default)]
    is_resume: Option<bool>,
    #[serde(default)]
    reason: Option<String>,
}

/// What the oracle's classification reply amounted to.
#[derive(Debug, PartialEq)]
enum ClassifyOutcome {
    Resume,
    NotResume(String),
    Unreadable(String),
}

fn interpret_classification(reply: &str) -> ClassifyOutcome {
    let Some(object) = JSON_OBJECT.find(reply) else {
        return ClassifyOutcome::Unreadable("no JSON object in reply".to_string());
    };
    match serde_json::from_str::<Classification>(object.as_str()) {
        Ok(Classification { is_resume: Some(true), .. }) => ClassifyOutcome::Resume,
        // A verdict object without `isResume` is a rejection, not noise.
        Ok(Classification { is_resume: None, .. }) => {
            ClassifyOutcome::NotResume(NOT_A_RESUME_MESSAGE.to_string())
        }
        Ok(Classification { reason, .. }) => ClassifyOutcome::NotResume(
            reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| NOT_A_RESUME_MESSAGE.to_string()),
        ),
        Err(e) => ClassifyOutcome::Unreadable(e.to_string()),
    }
}

/// Gate first, then the oracle's classification.
pub async fn validate_resume(text: &str, oracle: &dyn Oracle) -> Result<(), MatchError> {
    let hits = vocabulary_hits(text);
    if hits < MIN_VOCABULARY_HITS {
        debug!(hits, "resume gate rejected document without consulting the oracle");
        return Err(MatchError::NotAResume(NOT_A_RESUME_MESSAGE.to_string()));
    }

    let prompt = CLASSIFY_PROMPT_TEMPLATE.replace(
        "{document_text}",
        truncate_chars(text, CLASSIFY_PROMPT_MAX_CHARS),
    );
    let request = ChatRequest::new(vec![ChatMessage::user(prompt)]).with_tier(ModelTier::Light);

    match oracle.chat(&request).await {
        Ok(reply) => match interpret_classification(reply.content()) {
            ClassifyOutcome::Resume => Ok(()),
            ClassifyOutcome::NotResume(reason) => Err(MatchError::NotAResume(reason)),
            ClassifyOutcome::Unreadable(why) => {
                warn!("Resume validation warning: unreadable classification ({why}); proceeding");
                Ok(())
            }
        },
        Err(e) => {
            warn!("Resume validation warning: classification call failed ({e}); proceeding");
            Ok(())
        }
    }
}
