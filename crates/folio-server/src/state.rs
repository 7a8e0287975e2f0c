//! Shared application state for the folio server.
//!
//! A single [`AppState`] is constructed at startup and shared across
//! all Axum handlers via `Arc`. The message store is the only shared
//! mutable resource in the system.

use std::sync::Arc;

use folio_store::MessageStore;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Contact-message persistence.
    pub store: Arc<dyn MessageStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
