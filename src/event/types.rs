//! Event model: the venue, schedule, and security configuration a check-in
//! is verified against.
//!
//! Events are owned by an external event-management service and are
//! read-only to this core: they are looked up, inspected, and never
//! mutated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::{Coordinates, GeoError, VenueSize, VenueType};
use crate::token::SecurityLevel;

use super::error::{EventError, Result};

/// Opaque event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps a string identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A check-in-relevant view of an event.
///
/// Constructor-validated: venue coordinates are in range, the base radius
/// is positive and finite, capacity is at least one, and the schedule is
/// non-empty. Fields are private so those invariants hold for the struct's
/// whole lifetime (which is also why this type does not derive
/// `Deserialize`).
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: EventId,
    venue: Coordinates,
    base_radius_m: f64,
    venue_type: VenueType,
    venue_size: VenueSize,
    capacity: u32,
    security_level: SecurityLevel,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl Event {
    /// Creates a validated event.
    ///
    /// # Errors
    ///
    /// - [`GeoError::InvalidBaseRadius`] if `base_radius_m` is not positive
    ///   and finite
    /// - [`GeoError::InvalidCapacity`] if `capacity` is zero
    /// - [`EventError::EmptySchedule`] if `ends_at <= starts_at`
    #[allow(clippy::too_many_arguments)] // mirrors the upstream event record
    pub fn new(
        id: EventId,
        venue: Coordinates,
        base_radius_m: f64,
        venue_type: VenueType,
        venue_size: VenueSize,
        capacity: u32,
        security_level: SecurityLevel,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !base_radius_m.is_finite() || base_radius_m <= 0.0 {
            return Err(GeoError::InvalidBaseRadius(base_radius_m).into());
        }
        if capacity == 0 {
            return Err(GeoError::InvalidCapacity(capacity).into());
        }
        if ends_at <= starts_at {
            return Err(EventError::EmptySchedule {
                starts_at: starts_at.to_rfc3339(),
                ends_at: ends_at.to_rfc3339(),
            });
        }

        Ok(Self {
            id,
            venue,
            base_radius_m,
            venue_type,
            venue_size,
            capacity,
            security_level,
            starts_at,
            ends_at,
        })
    }

    /// The event identifier.
    #[must_use]
    pub const fn id(&self) -> &EventId {
        &self.id
    }

    /// Venue center coordinates.
    #[must_use]
    pub const fn venue(&self) -> Coordinates {
        self.venue
    }

    /// Configured base check-in radius, in meters.
    #[must_use]
    pub const fn base_radius_m(&self) -> f64 {
        self.base_radius_m
    }

    /// Venue enclosure type.
    #[must_use]
    pub const fn venue_type(&self) -> VenueType {
        self.venue_type
    }

    /// Venue footprint size.
    #[must_use]
    pub const fn venue_size(&self) -> VenueSize {
        self.venue_size
    }

    /// Maximum attendee capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The security tier check-in tokens must be issued under.
    #[must_use]
    pub const fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    /// Scheduled start instant.
    #[must_use]
    pub const fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// Scheduled end instant.
    #[must_use]
    pub const fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Whether check-ins are open at `now`. Both schedule boundaries are
    /// inclusive, matching the protocol's other boundary rules.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now && now <= self.ends_at
    }
}
