//! Event lookup seam.
//!
//! The event catalog is owned by an external event-management service; the
//! core only needs to resolve an id to a read-only [`Event`]. Lookup
//! failures caused by infrastructure (not by the id being unknown) surface
//! as [`StoreError`] so callers can retry them.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::store::StoreError;

use super::types::{Event, EventId};

/// Resolves event ids to events.
///
/// Implementations are expected to apply their own timeout policy; a call
/// must fail with [`StoreError::Unavailable`] rather than hang the caller.
pub trait EventDirectory: Send + Sync {
    /// Looks up an event by id.
    ///
    /// Returns `Ok(None)` when the id is unknown — that is an answer, not
    /// an infrastructure failure.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing service cannot be reached.
    fn find_event(&self, id: &EventId) -> Result<Option<Event>, StoreError>;
}

/// In-memory event directory.
///
/// Suitable for tests and single-process deployments where the event
/// catalog is loaded up front.
#[derive(Debug, Default)]
pub struct InMemoryEventDirectory {
    events: RwLock<HashMap<EventId, Event>>,
}

impl InMemoryEventDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an event.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the internal lock is poisoned.
    pub fn upsert(&self, event: Event) -> Result<(), StoreError> {
        let mut events = self
            .events
            .write()
            .map_err(|e| StoreError::Unavailable(format!("event directory lock: {e}")))?;
        events.insert(event.id().clone(), event);
        Ok(())
    }
}

impl EventDirectory for InMemoryEventDirectory {
    fn find_event(&self, id: &EventId) -> Result<Option<Event>, StoreError> {
        let events = self
            .events
            .read()
            .map_err(|e| StoreError::Unavailable(format!("event directory lock: {e}")))?;
        Ok(events.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::geo::{Coordinates, VenueSize, VenueType};
    use crate::token::SecurityLevel;

    use super::*;

    fn sample_event(id: &str) -> Event {
        let now = Utc::now();
        Event::new(
            EventId::new(id),
            Coordinates::new(48.8566, 2.3522).unwrap(),
            50.0,
            VenueType::Outdoor,
            VenueSize::Large,
            2000,
            SecurityLevel::High,
            now,
            now + Duration::hours(6),
        )
        .unwrap()
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let directory = InMemoryEventDirectory::new();
        let found = directory.find_event(&EventId::new("missing")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn upsert_then_find_returns_event() {
        let directory = InMemoryEventDirectory::new();
        let event = sample_event("evt_1");
        directory.upsert(event.clone()).unwrap();

        let found = directory.find_event(event.id()).unwrap();
        assert_eq!(found, Some(event));
    }

    #[test]
    fn upsert_replaces_existing_event() {
        let directory = InMemoryEventDirectory::new();
        directory.upsert(sample_event("evt_1")).unwrap();

        let now = Utc::now();
        let replacement = Event::new(
            EventId::new("evt_1"),
            Coordinates::new(40.0, -74.0).unwrap(),
            80.0,
            VenueType::Indoor,
            VenueSize::Small,
            100,
            SecurityLevel::Maximum,
            now,
            now + Duration::hours(1),
        )
        .unwrap();
        directory.upsert(replacement.clone()).unwrap();

        let found = directory.find_event(&EventId::new("evt_1")).unwrap();
        assert_eq!(found, Some(replacement));
    }
}
