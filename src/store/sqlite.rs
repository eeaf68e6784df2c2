//! `SQLite` attendance store.
//!
//! Persistent implementation of [`AttendanceStore`]. The uniqueness
//! constraint lives in the schema (`UNIQUE(event_id, user_id)`), and
//! `insert_if_absent` is a single `INSERT … ON CONFLICT DO NOTHING`
//! statement, so atomicity holds across processes, not just threads.

// SQLite operations need to hold the lock for the duration of the operation.
#![allow(clippy::significant_drop_tightening)]

use std::path::Path;
use std::sync::Mutex;

use chrono::TimeZone;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::event::EventId;

use super::error::{Result, StoreError};
use super::types::{AttendanceRecord, AttendanceStore, InsertOutcome};

/// `SQLite`-backed attendance store.
///
/// Thread-safe wrapper around a single connection. Instants are stored as
/// integer milliseconds since the epoch, coordinates and distance as REAL.
pub struct SqliteAttendanceStore {
    conn: Mutex<Connection>,
}

impl SqliteAttendanceStore {
    /// Opens (or creates) the store at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize_schema()?;
        debug!(path = %path.display(), "attendance store opened");
        Ok(store)
    }

    /// Creates an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS attendance (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                event_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                checked_in_at INTEGER NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                distance_meters REAL NOT NULL,
                UNIQUE(event_id, user_id)
            );
            ",
        )?;
        Ok(())
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("attendance database lock: {e}")))
    }
}

impl AttendanceStore for SqliteAttendanceStore {
    fn insert_if_absent(&self, record: &AttendanceRecord) -> Result<InsertOutcome> {
        let conn = self.lock_conn()?;

        let changed = conn.execute(
            r"
            INSERT INTO attendance (event_id, user_id, checked_in_at, latitude, longitude, distance_meters)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(event_id, user_id) DO NOTHING
            ",
            params![
                record.event_id.as_str(),
                &record.user_id,
                record.checked_in_at.timestamp_millis(),
                record.latitude,
                record.longitude,
                record.distance_meters,
            ],
        )?;

        if changed == 0 {
            Ok(InsertOutcome::AlreadyPresent)
        } else {
            Ok(InsertOutcome::Inserted)
        }
    }

    fn find(&self, event_id: &EventId, user_id: &str) -> Result<Option<AttendanceRecord>> {
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                r"
                SELECT event_id, user_id, checked_in_at, latitude, longitude, distance_meters
                FROM attendance
                WHERE event_id = ?1 AND user_id = ?2
                ",
                params![event_id.as_str(), user_id],
                |row| {
                    let event_id: String = row.get(0)?;
                    let user_id: String = row.get(1)?;
                    let checked_in_ms: i64 = row.get(2)?;
                    let latitude: f64 = row.get(3)?;
                    let longitude: f64 = row.get(4)?;
                    let distance_meters: f64 = row.get(5)?;
                    Ok((
                        event_id,
                        user_id,
                        checked_in_ms,
                        latitude,
                        longitude,
                        distance_meters,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((event_id, user_id, checked_in_ms, latitude, longitude, distance_meters)) => {
                let checked_in_at = chrono::Utc
                    .timestamp_millis_opt(checked_in_ms)
                    .single()
                    .ok_or_else(|| {
                        StoreError::Unavailable(format!(
                            "corrupt checked_in_at value: {checked_in_ms}"
                        ))
                    })?;
                Ok(Some(AttendanceRecord {
                    event_id: EventId::new(event_id),
                    user_id,
                    checked_in_at,
                    latitude,
                    longitude,
                    distance_meters,
                }))
            }
            None => Ok(None),
        }
    }

    fn count_for_event(&self, event_id: &EventId) -> Result<u64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM attendance WHERE event_id = ?1",
            params![event_id.as_str()],
            |row| row.get(0),
        )?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
