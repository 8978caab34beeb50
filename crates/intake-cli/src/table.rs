//! Submissions view state machine.
//!
//! Pure state over the retrieval result: `Loading` on mount and on every
//! refresh-signal change, then exactly one of `Error`, `Empty`, or
//! `Populated`. A failed fetch never leaves a previous list visible — the
//! states are mutually exclusive by construction.

use intake_core::StoredSubmission;

use crate::client::ClientError;

// ─── State ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState {
  /// A fetch is in flight.
  Loading,
  /// The fetch failed; retry re-enters `Loading`.
  Error(String),
  /// The store is empty.
  Empty,
  /// At least one record, newest first.
  Populated(Vec<StoredSubmission>),
}

// ─── View ─────────────────────────────────────────────────────────────────────

/// Read-side companion of the refresh signal: tracks which signal version
/// the current contents correspond to.
#[derive(Debug)]
pub struct SubmissionsView {
  pub state:    TableState,
  seen_version: Option<u64>,
}

impl Default for SubmissionsView {
  fn default() -> Self {
    Self::new()
  }
}

impl SubmissionsView {
  pub fn new() -> Self {
    Self {
      state:        TableState::Loading,
      seen_version: None,
    }
  }

  /// Whether the view is stale relative to the refresh signal. True before
  /// the first fetch and after every bump.
  pub fn needs_fetch(&self, version: u64) -> bool {
    self.seen_version != Some(version)
  }

  /// Enter `Loading` for a fetch triggered at signal `version`. Any
  /// previously displayed list or error is discarded now, not when the
  /// fetch resolves.
  pub fn begin_fetch(&mut self, version: u64) {
    self.state = TableState::Loading;
    self.seen_version = Some(version);
  }

  /// Apply the resolution of the in-flight fetch.
  ///
  /// Records are re-sorted here, newest first. The sort is stable and keys
  /// on `created_at` alone, so records sharing a timestamp keep the
  /// server's relative order across repeated fetches.
  pub fn apply_fetch(&mut self, result: Result<Vec<StoredSubmission>, ClientError>) {
    self.state = match result {
      Ok(records) if records.is_empty() => TableState::Empty,
      Ok(mut records) => {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        TableState::Populated(records)
      }
      Err(e) => TableState::Error(e.to_string()),
    };
  }
}
