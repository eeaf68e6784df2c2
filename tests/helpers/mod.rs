//! Reusable fixtures for check-in integration tests.
//!
//! Everything here uses the real issuer, validator, and stores — no
//! mocking. Time is always passed explicitly, so fixtures pin a single
//! `now` and derive every instant from it.

use chrono::{DateTime, Duration, Utc};
use eviden_core::checkin::{CheckInCoordinator, CheckInRequest};
use eviden_core::event::{Event, EventId, InMemoryEventDirectory};
use eviden_core::geo::{Coordinates, VenueSize, VenueType};
use eviden_core::store::InMemoryAttendanceStore;
use eviden_core::token::{
    codec, IssuerKey, SecurityLevel, SecurityPolicy, TokenIssuer, TokenValidator,
};

/// Venue center used by every fixture event (Berlin, Alexanderplatz).
pub const VENUE_LAT: f64 = 52.5219;
pub const VENUE_LON: f64 = 13.4132;

/// A reporter position ~20 m south of the venue center, inside every
/// radius the fixtures derive.
pub const NEARBY_LAT: f64 = 52.521_72;
pub const NEARBY_LON: f64 = 13.4132;

/// Builds an event active for two hours around `now`.
///
/// Base radius 100 m, 150 attendees, indoor, medium hall: derived radius
/// is exactly 92 m.
pub fn active_event(id: &str, level: SecurityLevel, now: DateTime<Utc>) -> Event {
    Event::new(
        EventId::new(id),
        Coordinates::new(VENUE_LAT, VENUE_LON).expect("fixture venue is valid"),
        100.0,
        VenueType::Indoor,
        VenueSize::Medium,
        150,
        level,
        now - Duration::hours(1),
        now + Duration::hours(1),
    )
    .expect("fixture event is valid")
}

/// A complete check-in setup over in-memory collaborators.
pub struct CheckInFixture {
    pub coordinator: CheckInCoordinator<InMemoryEventDirectory, InMemoryAttendanceStore>,
    pub issuer: TokenIssuer,
    pub event: Event,
    pub now: DateTime<Utc>,
}

impl CheckInFixture {
    /// Builds a fixture with one active event at the given security level
    /// and the default TTL policy.
    pub fn new(level: SecurityLevel) -> Self {
        Self::with_policy(level, SecurityPolicy::default())
    }

    /// Builds a fixture with a custom TTL policy.
    pub fn with_policy(level: SecurityLevel, policy: SecurityPolicy) -> Self {
        let key = IssuerKey::generate();
        let issuer = TokenIssuer::new(key.clone());
        let now = Utc::now();
        let event = active_event("evt_fixture", level, now);

        let directory = InMemoryEventDirectory::new();
        directory
            .upsert(event.clone())
            .expect("in-memory directory accepts upserts");

        let coordinator = CheckInCoordinator::new(
            directory,
            InMemoryAttendanceStore::new(),
            TokenValidator::new(key, policy),
        );

        Self {
            coordinator,
            issuer,
            event,
            now,
        }
    }

    /// A request carrying a freshly issued, correctly bound token and a
    /// nearby reporter position.
    pub fn valid_request(&self, user_id: &str) -> CheckInRequest {
        let token = self
            .issuer
            .issue(self.event.id(), self.event.security_level(), self.now);
        CheckInRequest {
            event_id: self.event.id().clone(),
            user_id: user_id.to_string(),
            token_payload: codec::encode(&token),
            latitude: NEARBY_LAT,
            longitude: NEARBY_LON,
            reported_at: Some(self.now),
        }
    }
}
