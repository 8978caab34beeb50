//! JSON HTTP API for the contact intake system.
//!
//! Exposes an axum [`Router`] backed by any
//! [`intake_core::store::SubmissionStore`]. Transport concerns (TLS,
//! listener lifecycle) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(intake_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod submissions;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::post,
};
use intake_core::store::SubmissionStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// `/submissions` accepts POST (write) and GET (read); any other method on
/// the path is answered with 405 by axum's method routing.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/submissions",
      post(submissions::create::<S>).get(submissions::list::<S>),
    )
    .with_state(store)
}

#[cfg(test)]
mod tests;
