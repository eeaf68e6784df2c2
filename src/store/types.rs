//! Attendance record types and the store contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::EventId;

use super::error::Result;

/// A committed check-in.
///
/// Created exactly once per successful check-in and never mutated by this
/// core; corrections are an external concern. At most one record exists per
/// `(event_id, user_id)` pair — that uniqueness is the store's one
/// constraint, enforced atomically by [`AttendanceStore::insert_if_absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The event checked into.
    pub event_id: EventId,
    /// The attendee, from the caller's authenticated session.
    pub user_id: String,
    /// When the check-in was committed.
    pub checked_in_at: DateTime<Utc>,
    /// Reporter latitude at check-in, degrees.
    pub latitude: f64,
    /// Reporter longitude at check-in, degrees.
    pub longitude: f64,
    /// Computed distance from the venue center, meters.
    pub distance_meters: f64,
}

/// Outcome of an atomic insert-if-absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was committed; this caller won the pair.
    Inserted,
    /// A record for this `(event_id, user_id)` pair already existed; nothing
    /// was written.
    AlreadyPresent,
}

/// The attendance record store contract.
///
/// The store is the only shared mutable resource in the check-in core.
/// `insert_if_absent` MUST be a single atomic conditional insert — not a
/// read-then-write — so that two concurrent attempts for the same pair
/// commit exactly one record. Implementations own their timeout policy and
/// surface infrastructure failures as [`StoreError`](super::StoreError)
/// instead of hanging the caller.
pub trait AttendanceStore: Send + Sync {
    /// Atomically commits `record` unless a record for its
    /// `(event_id, user_id)` pair already exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](super::StoreError) on infrastructure
    /// failure. A pre-existing record is NOT an error; it is
    /// [`InsertOutcome::AlreadyPresent`].
    fn insert_if_absent(&self, record: &AttendanceRecord) -> Result<InsertOutcome>;

    /// Fetches the record for a pair, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](super::StoreError) on infrastructure
    /// failure.
    fn find(&self, event_id: &EventId, user_id: &str) -> Result<Option<AttendanceRecord>>;

    /// Counts committed records for an event.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](super::StoreError) on infrastructure
    /// failure.
    fn count_for_event(&self, event_id: &EventId) -> Result<u64>;
}
