//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use intake_core::NewSubmission;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// One or more required fields were absent or blank in the write body.
  /// The response echoes the full required-field list, not just the
  /// offenders.
  #[error("missing required fields")]
  MissingFields,

  /// The store failed; `message` is the user-facing summary for this
  /// endpoint, the source carries the detail.
  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::MissingFields => (
        StatusCode::BAD_REQUEST,
        Json(json!({
          "message": "Missing required fields",
          "required": NewSubmission::REQUIRED_FIELDS,
        })),
      )
        .into_response(),
      ApiError::Store { message, source } => {
        tracing::error!(error = %source, "{message}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({
            "message": message,
            "error": source.to_string(),
          })),
        )
          .into_response()
      }
    }
  }
}
