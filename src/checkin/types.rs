//! Check-in request, decision, and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::EventId;
use crate::token::TokenError;

/// A logical check-in request.
///
/// `user_id` comes from the caller's authenticated session, never from the
/// QR payload — tokens carry no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// The event the caller claims to attend.
    pub event_id: EventId,
    /// The attendee, from the session.
    pub user_id: String,
    /// The raw scanned QR payload (bare JSON or URI-wrapped).
    pub token_payload: String,
    /// Reporter latitude, degrees.
    pub latitude: f64,
    /// Reporter longitude, degrees.
    pub longitude: f64,
    /// When the coordinates were sampled on the device, if known.
    /// Diagnostic only; the decision clock is the server-side `now`.
    #[serde(default)]
    pub reported_at: Option<DateTime<Utc>>,
}

/// Why a check-in attempt was rejected.
///
/// Every variant is terminal and reported exactly once; none is an
/// exception used for control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// QR content cannot be parsed.
    MalformedPayload,
    /// QR content lacks a required field.
    MissingField {
        /// The absent wire field.
        field: &'static str,
    },
    /// Security level string is not a recognized tier (fail closed).
    UnknownSecurityLevel {
        /// The unrecognized level string.
        level: String,
    },
    /// Token age exceeds its TTL.
    Expired,
    /// Token claims an issuance instant in the future.
    FutureIssued,
    /// Token belongs to a different event.
    WrongEvent,
    /// Token tier does not match the event's configured tier.
    SecurityLevelMismatch,
    /// Token integrity check failed.
    ForgedToken,
    /// No event with the requested id exists.
    EventNotFound,
    /// The event has not started or has already ended.
    EventNotActive,
    /// Reporter is outside the geofence.
    ProximityViolation {
        /// Measured distance from the venue center, meters.
        distance_meters: f64,
        /// Effective geofence radius, meters.
        radius_meters: f64,
    },
    /// A record for this `(event, user)` pair already exists. Benign and
    /// idempotent from the attendee's perspective.
    DuplicateCheckIn,
}

impl Rejection {
    /// Stable snake_case reason code for the wire response.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MalformedPayload => "malformed_payload",
            Self::MissingField { .. } => "missing_field",
            Self::UnknownSecurityLevel { .. } => "unknown_security_level",
            Self::Expired => "expired",
            Self::FutureIssued => "future_issued",
            Self::WrongEvent => "wrong_event",
            Self::SecurityLevelMismatch => "security_level_mismatch",
            Self::ForgedToken => "forged_token",
            Self::EventNotFound => "event_not_found",
            Self::EventNotActive => "event_not_active",
            Self::ProximityViolation { .. } => "proximity_violation",
            Self::DuplicateCheckIn => "duplicate_check_in",
        }
    }

    /// Whether the attendee can plausibly fix this themselves and try
    /// again (rescan, move closer). Configuration and binding failures are
    /// not attendee-fixable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::MalformedPayload
                | Self::MissingField { .. }
                | Self::Expired
                | Self::FutureIssued
                | Self::ProximityViolation { .. }
        )
    }

    /// Attendee-facing message for this rejection.
    ///
    /// Configuration failures (`UnknownSecurityLevel`,
    /// `SecurityLevelMismatch`, `ForgedToken`) deliberately stay vague for
    /// attendees; the precise cause is in the logs for operators.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedPayload | Self::MissingField { .. } => {
                "Invalid or damaged QR code.".to_string()
            }
            Self::Expired | Self::FutureIssued => {
                "QR code expired, please refresh and rescan.".to_string()
            }
            Self::WrongEvent => "This code is for a different event.".to_string(),
            Self::UnknownSecurityLevel { .. }
            | Self::SecurityLevelMismatch
            | Self::ForgedToken => "This code could not be verified.".to_string(),
            Self::EventNotFound => "Event not found.".to_string(),
            Self::EventNotActive => "Event has not started or has ended.".to_string(),
            Self::ProximityViolation {
                distance_meters,
                radius_meters,
            } => {
                let shortfall = (distance_meters - radius_meters).ceil();
                format!("Move {shortfall:.0} m closer to the venue to check in.")
            }
            Self::DuplicateCheckIn => "You are already checked in.".to_string(),
        }
    }
}

impl From<TokenError> for Rejection {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MalformedPayload(_) => Self::MalformedPayload,
            TokenError::MissingField(field) => Self::MissingField { field },
            TokenError::UnknownSecurityLevel(level) => Self::UnknownSecurityLevel { level },
            TokenError::Expired { .. } => Self::Expired,
            TokenError::FutureIssued { .. } => Self::FutureIssued,
            TokenError::WrongEvent { .. } => Self::WrongEvent,
            TokenError::SecurityLevelMismatch { .. } => Self::SecurityLevelMismatch,
            TokenError::Forged => Self::ForgedToken,
        }
    }
}

/// The single authoritative outcome of a check-in attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckInDecision {
    /// Both gates passed; exactly one attendance record was committed.
    CheckedIn {
        /// Measured distance from the venue center, meters.
        distance_meters: f64,
    },
    /// One gate failed; nothing was committed (except for
    /// [`Rejection::DuplicateCheckIn`], where the original record stands).
    Rejected(Rejection),
}

impl CheckInDecision {
    /// Converts the decision into the wire response shape.
    #[must_use]
    pub fn to_response(&self) -> CheckInResponse {
        match self {
            Self::CheckedIn { distance_meters } => CheckInResponse::CheckedIn {
                distance_meters: *distance_meters,
            },
            Self::Rejected(rejection) => CheckInResponse::Rejected {
                reason: rejection.reason().to_string(),
            },
        }
    }
}

/// Wire shape of a check-in response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckInResponse {
    /// `{"status":"checked_in","distanceMeters":…}`
    CheckedIn {
        /// Measured distance from the venue center, meters.
        #[serde(rename = "distanceMeters")]
        distance_meters: f64,
    },
    /// `{"status":"rejected","reason":"…"}`
    Rejected {
        /// Stable snake_case reason code.
        reason: String,
    },
}
