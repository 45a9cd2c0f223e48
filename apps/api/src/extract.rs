//! Request extractors.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejection renders as an `AppError` envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
