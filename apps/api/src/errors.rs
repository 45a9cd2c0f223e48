use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::error::MatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Match(err) => {
                let (status, code) = match err {
                    MatchError::InputTooShort { .. } => (StatusCode::BAD_REQUEST, "INPUT_TOO_SHORT"),
                    MatchError::NotAResume(_) => (StatusCode::UNPROCESSABLE_ENTITY, "NOT_A_RESUME"),
                    MatchError::OracleReportedError(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "ORACLE_REPORTED_ERROR")
                    }
                    MatchError::OracleNotReady => {
                        (StatusCode::SERVICE_UNAVAILABLE, "ORACLE_NOT_READY")
                    }
                    MatchError::JobSearchUnavailable(_) => {
                        (StatusCode::SERVICE_UNAVAILABLE, "JOB_SEARCH_UNAVAILABLE")
                    }
                    MatchError::NoJobsFound => (StatusCode::NOT_FOUND, "NO_JOBS_FOUND"),
                    MatchError::MalformedOracleResponse(_) => {
                        (StatusCode::BAD_GATEWAY, "MALFORMED_ORACLE_RESPONSE")
                    }
                    MatchError::EmptyOrInvalidKeywords(_) => {
                        (StatusCode::BAD_GATEWAY, "EMPTY_OR_INVALID_KEYWORDS")
                    }
                    MatchError::Oracle(_) => (StatusCode::BAD_GATEWAY, "ORACLE_ERROR"),
                };
                (status, code, err.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            ),
        }
    }
}

/// Malformed or mistyped request bodies get the same envelope as domain errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        match &self {
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ if status.is_server_error() => tracing::error!(code, "{message}"),
            _ => tracing::warn!(code, "{message}"),
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_match_errors_keep_their_message() {
        let err = AppError::from(MatchError::OracleReportedError("not a CV".to_string()));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "ORACLE_REPORTED_ERROR");
        assert_eq!(message, "not a CV");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (MatchError::InputTooShort { min_chars: 50 }, StatusCode::BAD_REQUEST),
            (MatchError::OracleNotReady, StatusCode::SERVICE_UNAVAILABLE),
            (MatchError::NoJobsFound, StatusCode::NOT_FOUND),
            (
                MatchError::JobSearchUnavailable("no key".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                MatchError::MalformedOracleResponse("x".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (MatchError::Oracle(LlmError::EmptyContent), StatusCode::BAD_GATEWAY),
        ];
        for (err, expected) in cases {
            let (status, _, _) = AppError::from(err).parts();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let (status, code, message) =
            AppError::Validation("missing field `resume_text`".to_string()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(message, "missing field `resume_text`");
    }

    #[derive(Clone, Default)]
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_internal_error_is_logged_once() {
        let counter = EventCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());

        let response = tracing::subscriber::with_default(subscriber, || {
            AppError::from(anyhow::anyhow!("disk on fire")).into_response()
        });

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let (status, _, message) = AppError::from(anyhow::anyhow!("secret detail")).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("secret"));
    }
}
