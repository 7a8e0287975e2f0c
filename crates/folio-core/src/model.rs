//! Domain entities for contact-form submissions.
//!
//! [`ContactMessage`] is the only persisted entity. It is write-once:
//! the store assigns `id` and `created_at` exactly once at creation and
//! no update or delete path exists anywhere in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact-form submission.
///
/// All four user-supplied fields have already passed validation by the
/// time a value of this type exists — constructing one any other way
/// than through the store bypasses that guarantee, so the store is the
/// only component that creates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Unique identifier, assigned by the store at creation.
    pub id: Uuid,
    /// Sender name (at least 2 characters).
    pub name: String,
    /// Sender email (valid email syntax).
    pub email: String,
    /// Subject line (at least 5 characters).
    pub subject: String,
    /// Message body (at least 10 characters).
    pub message: String,
    /// Creation timestamp, assigned by the store, immutable.
    pub created_at: DateTime<Utc>,
}

/// A validated submission before `id` and `created_at` assignment.
///
/// Produced exclusively by [`validate`](crate::validate::validate);
/// consumed by the store's `create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
