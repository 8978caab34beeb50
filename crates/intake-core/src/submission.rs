//! Submission records — the in-form draft, the write-side body, and the
//! stored row.
//!
//! Wire shapes use camelCase field names; the stored record additionally
//! carries the server-assigned `id`, `createdAt`, and `read` flag. The
//! client never supplies those three.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Draft ───────────────────────────────────────────────────────────────────

/// The four fields a visitor fills in, as held by the form while editing.
///
/// Created empty when the form is constructed, mutated by keystrokes, read
/// as a whole snapshot at submit time, and cleared only on confirmed
/// success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormInput {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub message:    String,
}

impl ContactFormInput {
  /// Reset every field to empty.
  pub fn clear(&mut self) {
    *self = Self::default();
  }

  /// Snapshot the draft into a write-API body.
  pub fn to_submission(&self) -> NewSubmission {
    NewSubmission {
      first_name: self.first_name.clone(),
      last_name:  self.last_name.clone(),
      email:      self.email.clone(),
      message:    self.message.clone(),
    }
  }
}

// ─── Write body ──────────────────────────────────────────────────────────────

/// JSON body of the write API: `{firstName, lastName, email, message}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub message:    String,
}

impl NewSubmission {
  /// Wire names of the four required fields, in declaration order. The
  /// write API echoes this full list in its 400 body whenever any field
  /// is missing.
  pub const REQUIRED_FIELDS: [&'static str; 4] =
    ["firstName", "lastName", "email", "message"];

  /// Wire names of fields that are absent or blank, in declaration order.
  ///
  /// The write API rejects a body with a non-empty result here.
  /// Whitespace-only values count as missing.
  pub fn missing_fields(&self) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if self.first_name.trim().is_empty() {
      missing.push("firstName");
    }
    if self.last_name.trim().is_empty() {
      missing.push("lastName");
    }
    if self.email.trim().is_empty() {
      missing.push("email");
    }
    if self.message.trim().is_empty() {
      missing.push("message");
    }
    missing
  }
}

// ─── Write acknowledgment ────────────────────────────────────────────────────

/// Success body of the write API: `{message, submissionId}`.
///
/// The id is the store-generated key for the new record. Clients may ignore
/// it; confirmation is the only load-bearing content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
  pub message:       String,
  pub submission_id: Uuid,
}

// ─── Stored row ──────────────────────────────────────────────────────────────

/// A persisted submission as returned by the read API.
///
/// `id` and `created_at` are assigned by the store at write time; `read`
/// defaults to false and is never mutated by this system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredSubmission {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
  #[serde(default)]
  pub read:       bool,
}

impl StoredSubmission {
  /// Display name: first name, a single space, last name.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}
