//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. UUIDs are stored as hyphenated
//! lowercase strings. The `read` flag is an INTEGER 0/1.

use chrono::{DateTime, Utc};
use intake_core::StoredSubmission;
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String {
  id.hyphenated().to_string()
}

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// A `submissions` row as read from SQLite, before decoding into domain
/// types. Field order matches the SELECT column order.
pub struct RawSubmission {
  pub id:         String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub message:    String,
  pub created_at: String,
  pub read:       bool,
}

impl RawSubmission {
  pub fn into_submission(self) -> Result<StoredSubmission> {
    Ok(StoredSubmission {
      id:         Uuid::parse_str(&self.id)?,
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      message:    self.message,
      created_at: decode_dt(&self.created_at)?,
      read:       self.read,
    })
  }
}
