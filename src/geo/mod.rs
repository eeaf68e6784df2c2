//! Geographic math for the check-in proximity gate.
//!
//! Provides:
//! - Validated WGS-84 [`Coordinates`]
//! - Haversine great-circle [`distance_meters`]
//! - Geofence radius derivation ([`compute_radius`]) from a base radius
//!   scaled by crowd capacity, venue enclosure, and venue footprint
//!
//! Everything here is pure and total once inputs are constructed; the only
//! fallible step is coordinate validation at the boundary.
//!
//! # Example
//!
//! ```
//! use eviden_core::geo::{compute_radius, distance_meters, Coordinates, VenueSize, VenueType};
//!
//! let venue = Coordinates::new(52.5200, 13.4050).unwrap();
//! let attendee = Coordinates::new(52.5204, 13.4055).unwrap();
//!
//! let distance = distance_meters(attendee, venue);
//! let radius = compute_radius(100.0, 800, VenueType::Outdoor, VenueSize::Large);
//!
//! if distance <= radius {
//!     println!("within the gate ({distance:.0} m of {radius:.0} m)");
//! }
//! ```

pub mod distance;
pub mod error;
pub mod types;

pub use distance::{
    capacity_multiplier, compute_radius, distance_meters, EARTH_RADIUS_M, MAX_RADIUS_M,
    MIN_RADIUS_M,
};
pub use error::GeoError;
pub use types::{Coordinates, VenueSize, VenueType};
