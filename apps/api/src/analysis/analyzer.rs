//! Resume analyzer: asks the oracle for a structured review of a resume.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::info;

use crate::analysis::prompts::{ANALYZE_PROMPT_MAX_CHARS, ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::llm_client::prompts::{
    truncate_chars, JSON_OBJECT, JSON_ONLY_INSTRUCTION, NOT_A_RESUME_INSTRUCTION,
};
use crate::llm_client::{ChatMessage, ChatRequest, Oracle};
use crate::matching::error::MatchError;

/// Scores out of 10 per dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceMetrics {
    pub formatting: f64,
    pub content_quality: f64,
    pub keyword_usage: f64,
    pub ats_compatibility: f64,
    pub quantifiable_achievements: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Kept as text; oracles send both `"82"` and `82`.
    #[serde(deserialize_with = "string_or_number")]
    pub overall_score: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub performance_metrics: PerformanceMetrics,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub pro_tips: Vec<String>,
    #[serde(default)]
    pub ats_checklist: Vec<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "overallScore must be a string or number, got {other}"
        ))),
    }
}

/// Parses the oracle's review out of free-form text.
///
/// The span from the first `{` to the last `}` must be a JSON object. An
/// `error` field is reported verbatim; otherwise `overallScore` is required.
pub fn parse_analysis_reply(reply: &str) -> Result<AnalysisReport, MatchError> {
    let object = JSON_OBJECT.find(reply).ok_or_else(|| {
        MatchError::MalformedOracleResponse("reply contains no JSON object".to_string())
    })?;

    let value: Value = serde_json::from_str(object.as_str()).map_err(|e| {
        MatchError::MalformedOracleResponse(format!("failed to parse AI response: {e}"))
    })?;

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(MatchError::OracleReportedError(message.to_string()));
    }

    if value.get("overallScore").map_or(true, Value::is_null) {
        return Err(MatchError::MalformedOracleResponse(
            "analysis is missing overallScore".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        MatchError::MalformedOracleResponse(format!("failed to parse AI response: {e}"))
    })
}

pub async fn analyze_resume(
    resume_text: &str,
    oracle: &dyn Oracle,
) -> Result<AnalysisReport, MatchError> {
    let prompt = ANALYZE_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{not_a_resume}", NOT_A_RESUME_INSTRUCTION)
        .replace(
            "{document_text}",
            truncate_chars(resume_text, ANALYZE_PROMPT_MAX_CHARS),
        );
    let request = ChatRequest::new(vec![
        ChatMessage::system(ANALYZE_SYSTEM),
        ChatMessage::user(prompt),
    ]);

    let reply = oracle.chat(&request).await?;
    let report = parse_analysis_reply(reply.content())?;

    info!(overall_score = %report.overall_score, "resume analysis complete");
    Ok(report)
}
