//! The proximity gate: is the reporter close enough to the venue?
//!
//! Thin, pure wrapper over the [`geo`](crate::geo) math. Stateless and safe
//! for unlimited parallel use.

use serde::Serialize;

use crate::event::Event;
use crate::geo::{self, Coordinates};

/// Outcome of a proximity check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProximityResult {
    /// Whether the reporter is inside the geofence. The boundary is
    /// inclusive: standing exactly on the radius line passes.
    pub within_range: bool,
    /// Great-circle distance from reporter to venue center, in meters.
    pub distance_meters: f64,
}

/// Answers "is point P within radius R of venue Q" and derives R from an
/// event's venue parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityEngine;

impl ProximityEngine {
    /// Creates a proximity engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks whether `reporter` lies within `radius_m` of `venue`.
    #[must_use]
    pub fn check(
        self,
        reporter: Coordinates,
        venue: Coordinates,
        radius_m: f64,
    ) -> ProximityResult {
        let distance_meters = geo::distance_meters(reporter, venue);
        ProximityResult {
            within_range: distance_meters <= radius_m,
            distance_meters,
        }
    }

    /// Derives the effective geofence radius for an event from its base
    /// radius, capacity, venue type, and venue size.
    #[must_use]
    pub fn derive_radius(self, event: &Event) -> f64 {
        geo::compute_radius(
            event.base_radius_m(),
            event.capacity(),
            event.venue_type(),
            event.venue_size(),
        )
    }
}
