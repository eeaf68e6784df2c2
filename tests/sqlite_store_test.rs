//! On-disk attendance store behavior: persistence and atomicity.

mod helpers;

use std::sync::Arc;

use chrono::Utc;
use eviden_core::event::EventId;
use eviden_core::store::{
    AttendanceRecord, AttendanceStore, InMemoryAttendanceStore, InsertOutcome,
    SqliteAttendanceStore,
};

fn record(event: &str, user: &str) -> AttendanceRecord {
    AttendanceRecord {
        event_id: EventId::new(event),
        user_id: user.to_string(),
        checked_in_at: Utc::now(),
        latitude: helpers::VENUE_LAT,
        longitude: helpers::VENUE_LON,
        distance_meters: 17.3,
    }
}

#[test]
fn records_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendance.db");

    {
        let store = SqliteAttendanceStore::open(&path).unwrap();
        assert_eq!(
            store.insert_if_absent(&record("evt_1", "user_a")).unwrap(),
            InsertOutcome::Inserted
        );
    }

    let reopened = SqliteAttendanceStore::open(&path).unwrap();
    let found = reopened.find(&EventId::new("evt_1"), "user_a").unwrap();
    assert!(found.is_some());
    assert_eq!(
        reopened.insert_if_absent(&record("evt_1", "user_a")).unwrap(),
        InsertOutcome::AlreadyPresent
    );
}

#[test]
fn concurrent_threads_commit_exactly_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendance.db");
    let store = Arc::new(SqliteAttendanceStore::open(&path).unwrap());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            store.insert_if_absent(&record("evt_1", "user_racer")).unwrap()
        }));
    }

    let outcomes: Vec<InsertOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let inserted = outcomes
        .iter()
        .filter(|o| **o == InsertOutcome::Inserted)
        .count();
    assert_eq!(inserted, 1);
    assert_eq!(store.count_for_event(&EventId::new("evt_1")).unwrap(), 1);
}

/// Both shipped stores implement the same contract; a pair accepted by one
/// is reported the same way by the other.
#[test]
fn memory_and_sqlite_stores_agree_on_insert_semantics() {
    let dir = tempfile::tempdir().unwrap();
    let sqlite = SqliteAttendanceStore::open(&dir.path().join("a.db")).unwrap();
    let memory = InMemoryAttendanceStore::new();

    let stores: [&dyn AttendanceStore; 2] = [&sqlite, &memory];
    for store in stores {
        assert_eq!(
            store.insert_if_absent(&record("evt_1", "user_a")).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            store.insert_if_absent(&record("evt_1", "user_a")).unwrap(),
            InsertOutcome::AlreadyPresent
        );
        assert_eq!(
            store.insert_if_absent(&record("evt_2", "user_a")).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(store.count_for_event(&EventId::new("evt_1")).unwrap(), 1);
        assert!(store.find(&EventId::new("evt_1"), "user_b").unwrap().is_none());
    }
}

#[test]
fn stored_timestamps_round_to_milliseconds() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteAttendanceStore::open(&dir.path().join("a.db")).unwrap();

    let original = record("evt_1", "user_a");
    store.insert_if_absent(&original).unwrap();

    let found = store.find(&EventId::new("evt_1"), "user_a").unwrap().unwrap();
    assert_eq!(
        found.checked_in_at.timestamp_millis(),
        original.checked_in_at.timestamp_millis()
    );
}
