//! Integration tests for the folio HTTP API.
//!
//! Drives the full router (routes, layers, error mapping) in-process
//! with `tower::ServiceExt::oneshot` — no sockets, no subprocesses.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use folio_core::{ContactDraft, ContactMessage};
use folio_server::state::AppState;
use folio_store::{MemoryStore, MessageStore, StoreError};

/// Build an app backed by a fresh in-memory store.
fn app() -> Router {
    let state = Arc::new(AppState {
        store: Arc::new(MemoryStore::new()),
    });
    folio_server::build_router(state)
}

/// A store whose every operation fails, for exercising the 500 path.
struct BrokenStore;

#[async_trait::async_trait]
impl MessageStore for BrokenStore {
    async fn create(&self, _draft: ContactDraft) -> Result<ContactMessage, StoreError> {
        Err(StoreError::Write {
            reason: "disk on fire".to_owned(),
        })
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Err(StoreError::Read {
            path: "/nowhere".to_owned(),
            reason: "disk on fire".to_owned(),
        })
    }
}

fn broken_app() -> Router {
    let state = Arc::new(AppState {
        store: Arc::new(BrokenStore),
    });
    folio_server::build_router(state)
}

fn post_contact(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get_contact() -> Request<Body> {
    Request::builder()
        .uri("/api/contact")
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const VALID: &str = r#"{"name":"Jo","email":"jo@x.com","subject":"Hello there","message":"This is a test message."}"#;

// ── Submission ───────────────────────────────────────────────────────

#[tokio::test]
async fn valid_submission_returns_success_with_id() {
    let response = app().oneshot(post_contact(VALID)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact message received successfully");
    assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn single_violation_yields_one_error() {
    let payload = r#"{"name":"A","email":"jo@x.com","subject":"Hello there","message":"This is a test message."}"#;
    let response = app().oneshot(post_contact(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid form data");

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "name");
}

#[tokio::test]
async fn multiple_violations_yield_one_error_per_field() {
    let payload = r#"{"name":"A","email":"bad","subject":"hi","message":"short"}"#;
    let response = app().oneshot(post_contact(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "subject", "message"]);
}

#[tokio::test]
async fn rejected_submission_is_not_stored() {
    let app = app();
    let payload = r#"{"name":"A","email":"bad","subject":"hi","message":"short"}"#;
    let response = app.clone().oneshot(post_contact(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get_contact()).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn malformed_body_gets_generic_rejection() {
    let response = app().oneshot(post_contact("{not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request body");
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn missing_fields_are_reported_not_rejected_as_malformed() {
    let response = app().oneshot(post_contact(r#"{}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Invalid form data");
    assert_eq!(body["errors"].as_array().unwrap().len(), 4);
}

// ── Listing ──────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_lists_successfully() {
    let response = app().oneshot(get_contact()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn listing_returns_submissions_in_order() {
    let app = app();
    let mut submitted_ids = Vec::new();

    for i in 0..3 {
        let payload = format!(
            r#"{{"name":"Jo","email":"jo@x.com","subject":"Message number {i}","message":"This is a test message."}}"#
        );
        let response = app.clone().oneshot(post_contact(&payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        submitted_ids.push(body["id"].as_str().unwrap().to_owned());
    }

    let response = app.oneshot(get_contact()).await.unwrap();
    let body = json_body(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);

    let listed_ids: Vec<&str> = data.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(listed_ids, submitted_ids);

    assert_eq!(data[0]["subject"], "Message number 0");
    assert!(data[0]["created_at"].as_str().is_some());
}

#[tokio::test]
async fn concurrent_submissions_all_stored_with_distinct_ids() {
    let app = app();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let response = app.oneshot(post_contact(VALID)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = json_body(response).await;
            body["id"].as_str().unwrap().to_owned()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50, "duplicate identifier assigned");

    let response = app.oneshot(get_contact()).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 50);
}

// ── Failure paths ────────────────────────────────────────────────────

#[tokio::test]
async fn store_failure_on_submit_is_a_generic_500() {
    let response = broken_app().oneshot(post_contact(VALID)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
    // Internal detail must never leak.
    assert!(!body.to_string().contains("disk on fire"));
}

#[tokio::test]
async fn store_failure_on_list_is_a_generic_500() {
    let response = broken_app().oneshot(get_contact()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
}

// ── Site routes ──────────────────────────────────────────────────────

#[tokio::test]
async fn portfolio_page_is_served_at_root() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Sowjanya"));
    assert!(html.contains("contact-form"));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let request = Request::builder()
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}
