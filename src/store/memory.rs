//! In-memory attendance store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::event::EventId;

use super::error::{Result, StoreError};
use super::types::{AttendanceRecord, AttendanceStore, InsertOutcome};

/// Thread-safe in-memory attendance store.
///
/// The uniqueness constraint is enforced by an occupied-entry check under a
/// single mutex, which makes `insert_if_absent` atomic with respect to
/// concurrent attempts. Suitable for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: Mutex<HashMap<(EventId, String), AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn insert_if_absent(&self, record: &AttendanceRecord) -> Result<InsertOutcome> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("attendance lock: {e}")))?;

        let key = (record.event_id.clone(), record.user_id.clone());
        match records.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => Ok(InsertOutcome::AlreadyPresent),
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    fn find(&self, event_id: &EventId, user_id: &str) -> Result<Option<AttendanceRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("attendance lock: {e}")))?;
        Ok(records
            .get(&(event_id.clone(), user_id.to_string()))
            .cloned())
    }

    fn count_for_event(&self, event_id: &EventId) -> Result<u64> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("attendance lock: {e}")))?;
        Ok(records.keys().filter(|(eid, _)| eid == event_id).count() as u64)
    }
}
