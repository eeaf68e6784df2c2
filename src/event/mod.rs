//! Event model and lookup.
//!
//! An [`Event`] is the read-only record a check-in is verified against:
//! venue location and classification (which drive the proximity gate),
//! security level (which drives token rotation), and the schedule window.
//! Events are created and updated by an external event-management
//! collaborator; this core only resolves them through [`EventDirectory`].

pub mod directory;
pub mod error;
pub mod types;

pub use directory::{EventDirectory, InMemoryEventDirectory};
pub use error::EventError;
pub use types::{Event, EventId};
