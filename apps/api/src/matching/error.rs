use thiserror::Error;

use crate::llm_client::LlmError;

/// Every failure of a matching request. All of them end the request; nothing
/// here is retried automatically.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Resume text is too short or empty. Please ensure your resume has at least {min_chars} characters of content.")]
    InputTooShort { min_chars: usize },

    #[error("AI service is not ready. Please wait a moment and try again.")]
    OracleNotReady,

    #[error("No valid keyword array found in AI response: {0}")]
    MalformedOracleResponse(String),

    #[error("Invalid keyword extraction result: {0}")]
    EmptyOrInvalidKeywords(String),

    /// Carries the oracle's own message verbatim.
    #[error("{0}")]
    OracleReportedError(String),

    #[error("Job search is unavailable: {0}")]
    JobSearchUnavailable(String),

    #[error("No jobs found matching your resume. Try updating your resume with more relevant skills or experience.")]
    NoJobsFound,

    #[error("{0}")]
    NotAResume(String),

    #[error("AI service call failed: {0}")]
    Oracle(#[from] LlmError),
}

/// Default message used when a document is rejected without a specific reason.
pub const NOT_A_RESUME_MESSAGE: &str = "This document does not appear to be a resume. \
    Please upload a proper resume containing professional experience, education, and skills sections.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_reported_error_is_verbatim() {
        let err = MatchError::OracleReportedError("Document is a recipe".to_string());
        assert_eq!(err.to_string(), "Document is a recipe");
    }

    #[test]
    fn test_input_too_short_mentions_threshold() {
        let err = MatchError::InputTooShort { min_chars: 50 };
        assert!(err.to_string().contains("50"));
    }
}
