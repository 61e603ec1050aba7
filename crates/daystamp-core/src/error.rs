//! Core error types for daystamp-core.

use thiserror::Error;

/// Errors raised by ledger persistence.
///
/// These never cross the check-in path: the store logs and swallows them so
/// the engine keeps serving from in-memory state.
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for StoreError
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
