//! Eviden Core Library
//!
//! Core functionality for Eviden - proximity-verified event check-ins.
//! This crate implements the check-in verification protocol: time-rotating
//! QR tokens, the GPS proximity gate around the venue, and the atomic
//! check-in decision that combines both.
//!
//! Everything is explicit and constructible: no global state, no timers,
//! and the clock is always a parameter, so the whole protocol is
//! deterministic under test.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod checkin;
pub mod event;
pub mod geo;
pub mod proximity;
pub mod store;
pub mod token;

pub use checkin::{CheckInCoordinator, CheckInDecision, CheckInRequest, Rejection};
pub use event::{Event, EventId};
pub use geo::Coordinates;
pub use token::{IssuerKey, SecurityLevel, SecurityPolicy, TokenIssuer, TokenValidator};
