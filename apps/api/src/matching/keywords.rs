//! Keyword extractor: asks the oracle for a ranked list of professional
//! keywords and validates the shape of its reply.
//!
//! Reply parsing lives entirely in `parse_keyword_reply` so a structured-output
//! oracle can replace it without touching callers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};

use crate::llm_client::prompts::{truncate_chars, JSON_ONLY_INSTRUCTION, NOT_A_RESUME_INSTRUCTION};
use crate::llm_client::{ChatMessage, ChatRequest, Oracle};
use crate::matching::error::MatchError;
use crate::matching::prompts::{KEYWORD_PROMPT_MAX_CHARS, KEYWORD_PROMPT_TEMPLATE, KEYWORD_SYSTEM};

/// Minimum trimmed resume length, in characters.
pub const MIN_RESUME_CHARS: usize = 50;

const KEYWORD_TEMPERATURE: f32 = 0.3;

static ERROR_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\{"error"\s*:\s*"([^"]+)""#).unwrap());
static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// Fails with `InputTooShort` unless `text` has enough content after trimming.
pub fn ensure_min_length(text: &str) -> Result<(), MatchError> {
    if text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(MatchError::InputTooShort {
            min_chars: MIN_RESUME_CHARS,
        });
    }
    Ok(())
}

fn build_keyword_request(resume_text: &str) -> ChatRequest {
    let prompt = KEYWORD_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{not_a_resume}", NOT_A_RESUME_INSTRUCTION)
        .replace(
            "{document_text}",
            truncate_chars(resume_text, KEYWORD_PROMPT_MAX_CHARS),
        );

    ChatRequest::new(vec![
        ChatMessage::system(KEYWORD_SYSTEM),
        ChatMessage::user(prompt),
    ])
    .with_temperature(KEYWORD_TEMPERATURE)
}

/// Extracts keywords for `resume_text`. Single oracle call, no retry.
pub async fn extract_keywords(
    resume_text: &str,
    oracle: &dyn Oracle,
) -> Result<Vec<String>, MatchError> {
    ensure_min_length(resume_text)?;

    let reply = oracle.chat(&build_keyword_request(resume_text)).await?;
    let keywords = parse_keyword_reply(reply.content())?;

    info!(count = keywords.len(), "extracted resume keywords");
    debug!(?keywords, "keyword list");
    Ok(keywords)
}

/// Turns free-form oracle text into a keyword list.
///
/// 1. An embedded `{"error": "..."}` wins and is reported verbatim.
/// 2. Otherwise the span from the first `[` to the last `]` must parse as JSON.
/// 3. The value must be a non-empty array of non-blank strings.
pub fn parse_keyword_reply(reply: &str) -> Result<Vec<String>, MatchError> {
    if reply.trim().is_empty() {
        return Err(MatchError::MalformedOracleResponse(
            "empty response from AI service".to_string(),
        ));
    }

    if let Some(caps) = ERROR_OBJECT.captures(reply) {
        return Err(MatchError::OracleReportedError(caps[1].to_string()));
    }

    let array = JSON_ARRAY.find(reply).ok_or_else(|| {
        MatchError::MalformedOracleResponse("reply contains no JSON array".to_string())
    })?;

    let value: Value = serde_json::from_str(array.as_str())
        .map_err(|e| MatchError::MalformedOracleResponse(format!("array is not valid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) if !items.is_empty() => items,
        Value::Array(_) => {
            return Err(MatchError::EmptyOrInvalidKeywords(
                "keyword list is empty".to_string(),
            ))
        }
        other => {
            return Err(MatchError::EmptyOrInvalidKeywords(format!(
                "expected an array, got {other}"
            )))
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            other => Err(MatchError::EmptyOrInvalidKeywords(format!(
                "keyword entries must be non-empty strings, got {other}"
            ))),
        })
        .collect()
}
