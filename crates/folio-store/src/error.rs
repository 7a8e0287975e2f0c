//! Store error types.
//!
//! Every variant carries enough context to diagnose the problem without
//! a debugger. Message bodies are never included — only paths, line
//! numbers, and underlying error descriptions.

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to open the backing file at the given path.
    #[error("failed to open store at '{path}': {reason}")]
    Open { path: String, reason: String },

    /// Failed to append a record to the store.
    #[error("failed to write record: {reason}")]
    Write { reason: String },

    /// Failed to read records back from the store.
    #[error("failed to read store at '{path}': {reason}")]
    Read { path: String, reason: String },

    /// A stored record could not be parsed.
    #[error("corrupt record at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },
}
