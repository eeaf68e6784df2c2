//! Error types for event construction.

use thiserror::Error;

use crate::geo::GeoError;

/// Errors produced while constructing an [`Event`](super::Event).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    /// Venue coordinates, base radius, or capacity failed validation.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// The event ends before (or exactly when) it starts.
    #[error("event schedule is empty: starts {starts_at}, ends {ends_at}")]
    EmptySchedule {
        /// Configured start instant (RFC 3339).
        starts_at: String,
        /// Configured end instant (RFC 3339).
        ends_at: String,
    },
}

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;
