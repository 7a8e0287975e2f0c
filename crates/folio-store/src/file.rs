//! JSON-lines file message store.
//!
//! Appends one JSON object per line to a file. The file is opened in
//! append-only mode — records are never rewritten, matching the
//! write-once lifecycle of a contact message.
//!
//! # Thread safety
//!
//! A `tokio::sync::Mutex` around the file handle serializes writes.
//! Identifier and timestamp assignment happen inside the same critical
//! section, so concurrent `create` calls cannot interleave records or
//! race on ordering. `list_all` re-reads the whole file; submission
//! volume on a personal site makes that a non-issue.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use folio_core::{ContactDraft, ContactMessage};

use crate::{MessageStore, StoreError};

/// Message store that appends JSON-lines to a file.
pub struct FileStore {
    /// Path to the message file.
    path: PathBuf,
    /// Serialized write access to the file.
    writer: Mutex<Option<tokio::fs::File>>,
}

impl FileStore {
    /// Create a new file store writing to the given path.
    ///
    /// The file is created (or opened for append) lazily on the first
    /// write, so constructing a store never fails.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writer: Mutex::new(None),
        }
    }

    /// Open or reuse the append-mode file handle.
    async fn get_writer(
        &self,
    ) -> Result<tokio::sync::MutexGuard<'_, Option<tokio::fs::File>>, StoreError> {
        let mut guard = self.writer.lock().await;
        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await
                .map_err(|e| StoreError::Open {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })?;
            *guard = Some(file);
        }
        Ok(guard)
    }
}

#[async_trait::async_trait]
impl MessageStore for FileStore {
    async fn create(&self, draft: ContactDraft) -> Result<ContactMessage, StoreError> {
        // Take the writer lock before assigning id/timestamp so record
        // order in the file matches assignment order.
        let mut guard = self.get_writer().await?;

        let record = ContactMessage {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            created_at: Utc::now(),
        };

        let mut line = serde_json::to_vec(&record).map_err(|e| StoreError::Write {
            reason: format!("serialization failed: {e}"),
        })?;
        line.push(b'\n');

        let file = guard.as_mut().ok_or_else(|| StoreError::Write {
            reason: "file handle unexpectedly None after open".to_owned(),
        })?;

        file.write_all(&line).await.map_err(|e| StoreError::Write {
            reason: e.to_string(),
        })?;

        file.flush().await.map_err(|e| StoreError::Write {
            reason: e.to_string(),
        })?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            // No file yet means no submissions yet, not a failure.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let mut records = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let record: ContactMessage =
                serde_json::from_str(line).map_err(|e| StoreError::Corrupt {
                    line: idx + 1,
                    reason: e.to_string(),
                })?;
            records.push(record);
        }

        Ok(records)
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
