//! Router-level tests against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use intake_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn router() -> Router {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  api_router(Arc::new(store))
}

fn post_json(value: Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri("/submissions")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(value.to_string()))
    .unwrap()
}

fn get_all() -> Request<Body> {
  Request::builder()
    .method("GET")
    .uri("/submissions")
    .body(Body::empty())
    .unwrap()
}

async fn body_json(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .expect("reading body");
  serde_json::from_slice(&bytes).expect("body is JSON")
}

fn complete_body() -> Value {
  json!({
    "firstName": "Alice",
    "lastName": "Liddell",
    "email": "alice@example.com",
    "message": "Hello there",
  })
}

// ─── Write ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn post_valid_body_acks_with_submission_id() {
  let app = router().await;

  let resp = app.oneshot(post_json(complete_body())).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);

  let body = body_json(resp).await;
  assert_eq!(body["message"], "Form submitted successfully");
  let id = body["submissionId"].as_str().expect("submissionId present");
  assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn post_with_absent_and_blank_fields_echoes_required_list() {
  let app = router().await;

  // email absent, firstName blank. The 400 body names every required
  // field, not just the offenders.
  let resp = app
    .oneshot(post_json(json!({
      "firstName": "  ",
      "lastName": "Liddell",
      "message": "Hello",
    })))
    .await
    .unwrap();

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body = body_json(resp).await;
  assert_eq!(body["message"], "Missing required fields");
  assert_eq!(
    body["required"],
    json!(["firstName", "lastName", "email", "message"])
  );
}

#[tokio::test]
async fn post_empty_object_echoes_required_list() {
  let app = router().await;

  let resp = app.oneshot(post_json(json!({}))).await.unwrap();

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body = body_json(resp).await;
  assert_eq!(
    body["required"],
    json!(["firstName", "lastName", "email", "message"])
  );
}

#[tokio::test]
async fn non_post_non_get_method_is_rejected() {
  let app = router().await;

  let resp = app
    .oneshot(
      Request::builder()
        .method("DELETE")
        .uri("/submissions")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ─── Read ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_on_empty_store_returns_empty_array() {
  let app = router().await;

  let resp = app.oneshot(get_all()).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn stored_record_comes_back_with_id_and_unread_flag() {
  let app = router().await;

  let resp = app
    .clone()
    .oneshot(post_json(complete_body()))
    .await
    .unwrap();
  let posted = body_json(resp).await;

  let resp = app.oneshot(get_all()).await.unwrap();
  let body = body_json(resp).await;

  let records = body.as_array().expect("array body");
  assert_eq!(records.len(), 1);
  assert_eq!(records[0]["id"], posted["submissionId"]);
  assert_eq!(records[0]["firstName"], "Alice");
  assert_eq!(records[0]["read"], json!(false));
  assert!(records[0]["createdAt"].is_string());
}

#[tokio::test]
async fn get_returns_newest_first() {
  let app = router().await;

  for name in ["Alice", "Bob", "Cara"] {
    let mut body = complete_body();
    body["firstName"] = json!(name);
    app.clone().oneshot(post_json(body)).await.unwrap();
  }

  let resp = app.oneshot(get_all()).await.unwrap();
  let body = body_json(resp).await;
  let names: Vec<_> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["firstName"].as_str().unwrap().to_owned())
    .collect();

  assert_eq!(names, vec!["Cara", "Bob", "Alice"]);
}
