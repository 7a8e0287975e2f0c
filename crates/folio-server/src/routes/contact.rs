//! Contact-message routes: `/api/contact`
//!
//! `POST /api/contact` walks a fixed pipeline: parse the body, run the
//! submission validator, hand the draft to the store, respond. Each
//! failure point maps to one [`ApiError`] variant, so a request always
//! terminates in exactly one JSON envelope.
//!
//! `GET /api/contact` lists all stored messages. No pagination and no
//! authentication — the listing is for trusted/internal use only.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use folio_core::{validate, ContactMessage, ContactPayload};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api/contact` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(submit_message).get(list_messages))
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<ContactMessage>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Accept a contact-form submission.
///
/// The body is taken as raw bytes rather than through the `Json`
/// extractor so a malformed body produces this API's generic 400
/// envelope instead of the framework's default rejection.
async fn submit_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ApiError> {
    let payload: ContactPayload = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "malformed contact payload");
        ApiError::InvalidBody
    })?;

    let draft = validate(payload).map_err(ApiError::Validation)?;

    let record = state.store.create(draft).await.map_err(|e| {
        tracing::error!(error = %e, "failed to persist contact message");
        ApiError::Internal
    })?;

    tracing::info!(id = %record.id, "contact message stored");

    Ok(Json(SubmitResponse {
        success: true,
        message: "Contact message received successfully",
        id: record.id,
    }))
}

/// List all stored contact messages, oldest first.
async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse>, ApiError> {
    let data = state.store.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list contact messages");
        ApiError::Internal
    })?;

    Ok(Json(ListResponse {
        success: true,
        data,
    }))
}
