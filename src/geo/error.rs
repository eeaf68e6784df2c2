//! Error types for geographic computations.

use thiserror::Error;

/// Errors that can occur while constructing or combining geographic values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude or longitude outside the valid degree ranges, or not finite.
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates {
        /// The rejected latitude value.
        latitude: f64,
        /// The rejected longitude value.
        longitude: f64,
    },

    /// Base check-in radius must be a positive, finite number of meters.
    #[error("invalid base radius: {0} m")]
    InvalidBaseRadius(f64),

    /// Venue capacity must be at least one attendee.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(u32),
}

/// Result type alias for geographic operations.
pub type Result<T> = std::result::Result<T, GeoError>;
