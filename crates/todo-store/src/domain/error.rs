//! Domain Layer - Errors
//!
//! Failures of the persistence accessor. None of these are retried.

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Stored value under the todos key is not a valid todo array
    #[error("stored todos are not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize todos: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The key-value backend refused a read or write
    #[error("storage error: {0}")]
    Storage(String),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}
