//! Attendance record storage.
//!
//! The store holds the protocol's only shared mutable state: the
//! at-most-one-record-per-`(event, user)` constraint. The
//! [`AttendanceStore`] trait is the contract; [`InMemoryAttendanceStore`]
//! and [`SqliteAttendanceStore`] are the shipped implementations. Both make
//! [`AttendanceStore::insert_if_absent`] a single atomic conditional
//! insert, never a read-then-write.

pub mod error;
pub mod memory;
pub mod sqlite;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
pub mod types;

pub use error::StoreError;
pub use memory::InMemoryAttendanceStore;
pub use sqlite::SqliteAttendanceStore;
pub use types::{AttendanceRecord, AttendanceStore, InsertOutcome};
