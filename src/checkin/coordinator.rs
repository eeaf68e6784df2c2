//! The check-in coordinator: one authoritative decision per attempt.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::event::EventDirectory;
use crate::geo::Coordinates;
use crate::proximity::ProximityEngine;
use crate::store::{AttendanceRecord, AttendanceStore, InsertOutcome};
use crate::token::TokenValidator;

use super::error::Result;
use super::types::{CheckInDecision, CheckInRequest, Rejection};

/// Orchestrates token validation, the proximity gate, and the attendance
/// store into a single check-in decision.
///
/// Steps, each short-circuiting on failure:
///
/// 1. Event lookup and schedule-window check
/// 2. Token decode + validation against this event
/// 3. Radius derivation + proximity check
/// 4. One atomic insert-if-absent against the store (steps 4 and 5 of the
///    protocol are a single conditional insert, so two concurrent attempts
///    for the same `(event, user)` pair commit exactly one record)
///
/// No step is retried internally; every failure is reported once as a
/// typed decision or, for infrastructure problems, as a
/// [`CheckInError`](super::CheckInError).
///
/// The coordinator holds no mutable state and takes the clock as an
/// explicit parameter, so it is safe to share across threads and trivial
/// to test without real time.
#[derive(Debug)]
pub struct CheckInCoordinator<D, S> {
    directory: D,
    store: S,
    validator: TokenValidator,
    proximity: ProximityEngine,
}

impl<D: EventDirectory, S: AttendanceStore> CheckInCoordinator<D, S> {
    /// Creates a coordinator over the given collaborators.
    pub const fn new(directory: D, store: S, validator: TokenValidator) -> Self {
        Self {
            directory,
            store,
            validator,
            proximity: ProximityEngine::new(),
        }
    }

    /// Attempts a check-in and returns the one authoritative decision.
    ///
    /// # Errors
    ///
    /// - [`CheckInError::Store`](super::CheckInError::Store) when the event
    ///   directory or attendance store cannot be reached (transient, caller
    ///   may retry)
    /// - [`CheckInError::Coordinates`](super::CheckInError::Coordinates)
    ///   when the reporter coordinates are not valid degrees
    pub fn attempt_check_in(
        &self,
        request: &CheckInRequest,
        now: DateTime<Utc>,
    ) -> Result<CheckInDecision> {
        // Step 1: event lookup + schedule window.
        let Some(event) = self.directory.find_event(&request.event_id)? else {
            return Ok(reject(request, Rejection::EventNotFound));
        };
        if !event.is_active(now) {
            return Ok(reject(request, Rejection::EventNotActive));
        }

        // Step 2: token decode + validation against this event.
        if let Err(err) = self
            .validator
            .validate_payload(&request.token_payload, &event, now)
        {
            debug!(event = %request.event_id, %err, "token rejected");
            return Ok(CheckInDecision::Rejected(err.into()));
        }

        // Step 3: proximity gate.
        let reporter = Coordinates::new(request.latitude, request.longitude)?;
        let radius_meters = self.proximity.derive_radius(&event);
        let proximity = self.proximity.check(reporter, event.venue(), radius_meters);
        if !proximity.within_range {
            return Ok(reject(
                request,
                Rejection::ProximityViolation {
                    distance_meters: proximity.distance_meters,
                    radius_meters,
                },
            ));
        }

        // Steps 4+5: one atomic conditional insert against the store.
        let record = AttendanceRecord {
            event_id: request.event_id.clone(),
            user_id: request.user_id.clone(),
            checked_in_at: now,
            latitude: reporter.latitude,
            longitude: reporter.longitude,
            distance_meters: proximity.distance_meters,
        };
        match self.store.insert_if_absent(&record)? {
            InsertOutcome::AlreadyPresent => Ok(reject(request, Rejection::DuplicateCheckIn)),
            InsertOutcome::Inserted => {
                info!(
                    event = %request.event_id,
                    distance_m = proximity.distance_meters,
                    "check-in committed"
                );
                Ok(CheckInDecision::CheckedIn {
                    distance_meters: proximity.distance_meters,
                })
            }
        }
    }
}

fn reject(request: &CheckInRequest, rejection: Rejection) -> CheckInDecision {
    debug!(
        event = %request.event_id,
        reason = rejection.reason(),
        "check-in rejected"
    );
    CheckInDecision::Rejected(rejection)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use crate::event::{Event, EventId, InMemoryEventDirectory};
    use crate::geo::{VenueSize, VenueType};
    use crate::store::InMemoryAttendanceStore;
    use crate::token::{codec, IssuerKey, SecurityLevel, SecurityPolicy, TokenIssuer};

    use super::*;

    struct Fixture {
        coordinator: CheckInCoordinator<InMemoryEventDirectory, InMemoryAttendanceStore>,
        issuer: TokenIssuer,
        event_id: EventId,
        now: DateTime<Utc>,
    }

    fn fixture(level: SecurityLevel) -> Fixture {
        let key = IssuerKey::generate();
        let issuer = TokenIssuer::new(key.clone());
        let validator = TokenValidator::new(key, SecurityPolicy::default());
        let now = Utc::now();
        let event_id = EventId::new("evt_1");

        let directory = InMemoryEventDirectory::new();
        directory
            .upsert(
                Event::new(
                    event_id.clone(),
                    Coordinates::new(52.52, 13.405).unwrap(),
                    100.0,
                    VenueType::Indoor,
                    VenueSize::Medium,
                    150,
                    level,
                    now - Duration::hours(1),
                    now + Duration::hours(1),
                )
                .unwrap(),
            )
            .unwrap();

        Fixture {
            coordinator: CheckInCoordinator::new(
                directory,
                InMemoryAttendanceStore::new(),
                validator,
            ),
            issuer,
            event_id,
            now,
        }
    }

    fn request(fixture: &Fixture, payload: String) -> CheckInRequest {
        CheckInRequest {
            event_id: fixture.event_id.clone(),
            user_id: "user_a".to_string(),
            token_payload: payload,
            // ~20 m from the venue center; inside the 92 m derived radius.
            latitude: 52.520_18,
            longitude: 13.405,
            reported_at: None,
        }
    }

    fn valid_payload(fixture: &Fixture, level: SecurityLevel) -> String {
        let token = fixture.issuer.issue(&fixture.event_id, level, fixture.now);
        codec::encode(&token)
    }

    #[test]
    fn happy_path_checks_in_with_distance() {
        let f = fixture(SecurityLevel::High);
        let req = request(&f, valid_payload(&f, SecurityLevel::High));

        let decision = f.coordinator.attempt_check_in(&req, f.now).unwrap();
        match decision {
            CheckInDecision::CheckedIn { distance_meters } => {
                assert!(distance_meters > 0.0 && distance_meters < 92.0);
            }
            CheckInDecision::Rejected(r) => panic!("unexpected rejection: {r:?}"),
        }
    }

    #[test]
    fn unknown_event_is_event_not_found() {
        let f = fixture(SecurityLevel::High);
        let mut req = request(&f, valid_payload(&f, SecurityLevel::High));
        req.event_id = EventId::new("evt_ghost");

        let decision = f.coordinator.attempt_check_in(&req, f.now).unwrap();
        assert_eq!(decision, CheckInDecision::Rejected(Rejection::EventNotFound));
    }

    #[test]
    fn ended_event_rejects_before_token_or_proximity() {
        let f = fixture(SecurityLevel::High);
        // Valid token, valid position — but the event ended an hour ago
        // from this clock's perspective.
        let req = request(&f, valid_payload(&f, SecurityLevel::High));
        let after_end = f.now + Duration::hours(2);

        let decision = f.coordinator.attempt_check_in(&req, after_end).unwrap();
        assert_eq!(
            decision,
            CheckInDecision::Rejected(Rejection::EventNotActive)
        );
    }

    #[test]
    fn token_rejections_propagate_their_kind() {
        let f = fixture(SecurityLevel::Maximum);
        let req = request(&f, valid_payload(&f, SecurityLevel::Maximum));

        let late = f.now + Duration::seconds(31);
        // Event still active at +31 s, token is not.
        let decision = f.coordinator.attempt_check_in(&req, late).unwrap();
        assert_eq!(decision, CheckInDecision::Rejected(Rejection::Expired));
    }

    #[test]
    fn out_of_range_reporter_gets_distance_and_radius() {
        let f = fixture(SecurityLevel::High);
        let mut req = request(&f, valid_payload(&f, SecurityLevel::High));
        req.latitude = 52.53; // ~1.1 km north

        let decision = f.coordinator.attempt_check_in(&req, f.now).unwrap();
        match decision {
            CheckInDecision::Rejected(Rejection::ProximityViolation {
                distance_meters,
                radius_meters,
            }) => {
                assert!(distance_meters > 1000.0);
                assert!((radius_meters - 92.0).abs() < 1e-9);
            }
            other => panic!("expected proximity violation, got {other:?}"),
        }
    }

    #[test]
    fn second_attempt_is_duplicate() {
        let f = fixture(SecurityLevel::High);
        let req = request(&f, valid_payload(&f, SecurityLevel::High));

        let first = f.coordinator.attempt_check_in(&req, f.now).unwrap();
        assert!(matches!(first, CheckInDecision::CheckedIn { .. }));

        let second = f.coordinator.attempt_check_in(&req, f.now).unwrap();
        assert_eq!(
            second,
            CheckInDecision::Rejected(Rejection::DuplicateCheckIn)
        );
    }

    #[test]
    fn invalid_reporter_coordinates_are_a_hard_error() {
        let f = fixture(SecurityLevel::High);
        let mut req = request(&f, valid_payload(&f, SecurityLevel::High));
        req.latitude = 95.0;

        let err = f.coordinator.attempt_check_in(&req, f.now).unwrap_err();
        assert!(matches!(err, super::super::CheckInError::Coordinates(_)));
    }

    #[test]
    fn rejection_never_commits_a_record() {
        let f = fixture(SecurityLevel::Maximum);
        let req = request(&f, valid_payload(&f, SecurityLevel::Maximum));

        // Expired attempt first.
        let late = f.now + Duration::seconds(31);
        f.coordinator.attempt_check_in(&req, late).unwrap();

        // The pair is still free: a fresh token checks in normally.
        let fresh = request(&f, valid_payload(&f, SecurityLevel::Maximum));
        let decision = f.coordinator.attempt_check_in(&fresh, f.now).unwrap();
        assert!(matches!(decision, CheckInDecision::CheckedIn { .. }));
    }
}
