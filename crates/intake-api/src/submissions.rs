//! Handlers for the `/submissions` endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/submissions` | Body: `{firstName, lastName, email, message}` |
//! | `GET`  | `/submissions` | Returns every stored record, newest first |

use std::sync::Arc;

use axum::{Json, extract::State};
use intake_core::{
  store::SubmissionStore,
  submission::{NewSubmission, StoredSubmission, SubmitAck},
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// Write body with every field optional, so that an absent field reaches
/// the handler and is answered with the 400 `required` list instead of a
/// deserialisation rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBody {
  #[serde(default)]
  pub first_name: Option<String>,
  #[serde(default)]
  pub last_name:  Option<String>,
  #[serde(default)]
  pub email:      Option<String>,
  #[serde(default)]
  pub message:    Option<String>,
}

impl SubmitBody {
  fn into_submission(self) -> NewSubmission {
    NewSubmission {
      first_name: self.first_name.unwrap_or_default(),
      last_name:  self.last_name.unwrap_or_default(),
      email:      self.email.unwrap_or_default(),
      message:    self.message.unwrap_or_default(),
    }
  }
}

/// `POST /submissions` — persist one submission.
///
/// The store assigns the id and write-time timestamp; the new record starts
/// unread. Absent and blank fields are equivalent: both produce a 400
/// echoing the full required-field list.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<SubmitBody>,
) -> Result<Json<SubmitAck>, ApiError>
where
  S: SubmissionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = body.into_submission();

  if !input.missing_fields().is_empty() {
    return Err(ApiError::MissingFields);
  }

  let stored = store
    .add_submission(input)
    .await
    .map_err(|e| ApiError::Store {
      message: "Error storing submission",
      source:  Box::new(e),
    })?;

  tracing::info!(id = %stored.id, "stored submission");

  Ok(Json(SubmitAck {
    message:       "Form submitted successfully".to_string(),
    submission_id: stored.id,
  }))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /submissions` — every stored record, newest first.
///
/// An empty store yields `[]`, not an error.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<StoredSubmission>>, ApiError>
where
  S: SubmissionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let submissions = store
    .list_submissions()
    .await
    .map_err(|e| ApiError::Store {
      message: "Error fetching submissions",
      source:  Box::new(e),
    })?;
  Ok(Json(submissions))
}
