//! Async HTTP client wrapping the intake JSON API.

use std::time::Duration;

use intake_core::{NewSubmission, StoredSubmission, SubmitAck};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

// ─── Errors ───────────────────────────────────────────────────────────────────

/// How one API call failed.
///
/// `Network` means the transport call itself never completed; `Server` is a
/// well-formed non-success response; `MalformedResponse` is a success status
/// whose body did not parse as the expected shape. The UI treats the last
/// two identically.
#[derive(Debug, Error)]
pub enum ClientError {
  #[error("network error: {0}")]
  Network(#[source] reqwest::Error),

  #[error("server error ({status}): {message}")]
  Server {
    status:  StatusCode,
    message: String,
  },

  #[error("malformed response: {0}")]
  MalformedResponse(#[source] reqwest::Error),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Error body shape shared by the API's 400/500 responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  message: Option<String>,
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Connection settings for the intake API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the intake JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  /// Turn a non-success response into [`ClientError::Server`], preferring
  /// the body's `message` field when one is present.
  async fn server_error(resp: Response) -> ClientError {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
      Ok(ErrorBody {
        message: Some(message),
      }) => message,
      _ => status
        .canonical_reason()
        .unwrap_or("unexpected server response")
        .to_string(),
    };
    ClientError::Server { status, message }
  }

  /// `POST /submissions`
  pub async fn submit(&self, input: &NewSubmission) -> Result<SubmitAck> {
    let resp = self
      .client
      .post(self.url("/submissions"))
      .json(input)
      .send()
      .await
      .map_err(ClientError::Network)?;

    if !resp.status().is_success() {
      return Err(Self::server_error(resp).await);
    }
    resp.json().await.map_err(ClientError::MalformedResponse)
  }

  /// `GET /submissions`
  ///
  /// An empty backing store yields `Ok(vec![])`.
  pub async fn fetch_all(&self) -> Result<Vec<StoredSubmission>> {
    let resp = self
      .client
      .get(self.url("/submissions"))
      .send()
      .await
      .map_err(ClientError::Network)?;

    if !resp.status().is_success() {
      return Err(Self::server_error(resp).await);
    }
    resp.json().await.map_err(ClientError::MalformedResponse)
  }
}
