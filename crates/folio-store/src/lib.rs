//! Message store abstraction for folio.
//!
//! This crate defines the [`MessageStore`] trait — a two-operation
//! persistence interface for contact messages. The store is the only
//! component that constructs [`ContactMessage`] values: it assigns the
//! identifier and creation timestamp inside a single critical section,
//! so concurrent submissions can never race into duplicate ids or lost
//! writes.
//!
//! Two implementations are provided:
//!
//! - [`MemoryStore`] — append-only `Vec`, data lost on restart
//! - [`FileStore`] — JSON-lines file, one record per line, append-only

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use folio_core::{ContactDraft, ContactMessage};

/// A pluggable contact-message store.
///
/// Records are write-once, read-many: there is no update or delete
/// operation, and `list_all` returns records in insertion order.
///
/// Implementations must be safe to share across async tasks
/// (`Send + Sync`).
#[async_trait::async_trait]
pub trait MessageStore: Send + Sync + 'static {
    /// Persist a validated draft, assigning a fresh unique identifier
    /// and the creation timestamp. Returns the stored record.
    ///
    /// Must never produce a duplicate identifier, even under concurrent
    /// calls.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the persistence medium fails.
    async fn create(&self, draft: ContactDraft) -> Result<ContactMessage, StoreError>;

    /// Return all stored records, oldest first.
    ///
    /// An empty store yields an empty `Vec`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the persistence medium fails.
    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError>;
}
