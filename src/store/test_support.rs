//! Failure-injection doubles for exercising infrastructure error paths.
//!
//! Gated behind the `test-utils` feature. DO NOT use in production.

use crate::event::{Event, EventDirectory, EventId};

use super::error::{Result, StoreError};
use super::types::{AttendanceRecord, AttendanceStore, InsertOutcome};

/// An attendance store whose every operation fails with
/// [`StoreError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl AttendanceStore for UnavailableStore {
    fn insert_if_absent(&self, _record: &AttendanceRecord) -> Result<InsertOutcome> {
        Err(StoreError::Unavailable("injected outage".to_string()))
    }

    fn find(&self, _event_id: &EventId, _user_id: &str) -> Result<Option<AttendanceRecord>> {
        Err(StoreError::Unavailable("injected outage".to_string()))
    }

    fn count_for_event(&self, _event_id: &EventId) -> Result<u64> {
        Err(StoreError::Unavailable("injected outage".to_string()))
    }
}

/// An event directory whose every lookup fails with
/// [`StoreError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableDirectory;

impl EventDirectory for UnavailableDirectory {
    fn find_event(&self, _id: &EventId) -> Result<Option<Event>> {
        Err(StoreError::Unavailable("injected outage".to_string()))
    }
}
