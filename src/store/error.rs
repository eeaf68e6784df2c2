//! Error types for attendance storage and event lookup.

use thiserror::Error;

/// Errors surfaced by the attendance store and event directory.
///
/// All variants are transient infrastructure failures from the caller's
/// point of view: safe to retry, never silently swallowed, and never used
/// to express a protocol decision.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store cannot currently be reached (lock poisoned,
    /// connection refused, timeout in the implementation's own policy).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Database error from `SQLite`.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
