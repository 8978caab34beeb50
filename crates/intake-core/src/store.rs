//! The `SubmissionStore` trait.
//!
//! Implemented by storage backends (e.g. `intake-store-sqlite`). Higher
//! layers (`intake-api`) depend on this abstraction, not on any concrete
//! backend.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::submission::{NewSubmission, StoredSubmission};

/// Abstraction over a submission store backend.
///
/// Writes are insert-only: a stored submission is never updated or deleted
/// by this system. The store assigns `id`, `created_at`, and the initial
/// `read = false` flag; callers never supply them.
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new submission and return the stored record, including the
  /// generated id and write-time timestamp.
  fn add_submission(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<StoredSubmission, Self::Error>> + Send + '_;

  /// Return every stored submission, newest first. An empty store yields
  /// an empty vector, not an error.
  fn list_submissions(
    &self,
  ) -> impl Future<Output = Result<Vec<StoredSubmission>, Self::Error>> + Send + '_;
}
