//! In-memory message store.
//!
//! Records live in a `Vec` behind a `RwLock`. Not persistent — all data
//! is lost when the process exits. This is the default backend and the
//! one used throughout the test suites.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::{ContactDraft, ContactMessage};

use crate::{MessageStore, StoreError};

/// An in-memory store backed by an append-only `Vec`.
///
/// Identifier assignment and the append happen under a single write
/// lock, so concurrent `create` calls serialize cleanly: every call
/// gets a distinct id and its own slot in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageStore for MemoryStore {
    async fn create(&self, draft: ContactDraft) -> Result<ContactMessage, StoreError> {
        let mut messages = self.messages.write().await;

        let record = ContactMessage {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            created_at: Utc::now(),
        };

        messages.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let messages = self.messages.read().await;
        Ok(messages.clone())
    }
}
