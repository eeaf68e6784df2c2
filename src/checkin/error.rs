//! Hard-failure channel for check-in attempts.

use thiserror::Error;

use crate::geo::GeoError;
use crate::store::StoreError;

/// Infrastructure and input failures that are NOT protocol decisions.
///
/// A [`CheckInError`] means the attempt could not be adjudicated at all:
/// the caller may retry a `Store` failure; a `Coordinates` failure needs a
/// corrected request. Protocol outcomes (expired token, out of range, …)
/// travel as [`CheckInDecision`](super::CheckInDecision) values instead.
#[derive(Error, Debug)]
pub enum CheckInError {
    /// The event directory or attendance store cannot be reached.
    /// Transient; safe to retry.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The reporter coordinates are not valid degrees.
    #[error(transparent)]
    Coordinates(#[from] GeoError),
}

/// Result type alias for check-in operations.
pub type Result<T> = std::result::Result<T, CheckInError>;
