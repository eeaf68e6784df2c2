//! Core token types: security tiers and the check-in token itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::EventId;

/// Named security tier controlling how fast a check-in QR code rotates.
///
/// Each tier maps to a token time-to-live in
/// [`SecurityPolicy`](super::SecurityPolicy); higher tiers mean shorter
/// windows and therefore faster rotation on the organizer's display.
///
/// # TTL Table (default policy)
///
/// | Level    | TTL     |
/// |----------|---------|
/// | Basic    | 24 h    |
/// | Standard | 5 min   |
/// | High     | 1 min   |
/// | Maximum  | 30 s    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    /// Static codes, e.g. printed badges for low-stakes events.
    Basic,
    /// Rotating codes for ordinary ticketed events.
    Standard,
    /// Fast rotation for access-controlled events.
    High,
    /// Fastest rotation; codes are effectively single-glance.
    Maximum,
}

impl SecurityLevel {
    /// Converts to string representation for storage and the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::High => "high",
            Self::Maximum => "maximum",
        }
    }

    /// Parses from string representation.
    ///
    /// Returns `None` for unrecognized input. Callers on the wire boundary
    /// translate that into
    /// [`TokenError::UnknownSecurityLevel`](super::TokenError::UnknownSecurityLevel)
    /// rather than falling back to a lax tier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "standard" => Some(Self::Standard),
            "high" => Some(Self::High),
            "maximum" => Some(Self::Maximum),
            _ => None,
        }
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded check-in token, as carried inside the QR payload.
///
/// Tokens are stateless and self-describing: validity is a pure function of
/// these fields, the shared issuer key, and the current time. A token is
/// meaningful only paired with the event it names, and it carries no user
/// identity — identity arrives separately from the caller's authenticated
/// session.
///
/// Tokens are never mutated after issuance; they are validated and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInToken {
    /// The event this token belongs to.
    pub event_id: EventId,
    /// Issuance instant. Must be `<= now` at validation time.
    pub issued_at: DateTime<Utc>,
    /// Security tier the token was issued under. Must equal the event's
    /// configured tier at validation time.
    pub security_level: SecurityLevel,
    /// Opaque integrity value: URL-safe base64 of `nonce ‖ mac`. Verified
    /// by the validator, never interpreted by the codec.
    pub integrity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_level_string_roundtrip() {
        for level in [
            SecurityLevel::Basic,
            SecurityLevel::Standard,
            SecurityLevel::High,
            SecurityLevel::Maximum,
        ] {
            assert_eq!(SecurityLevel::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn security_level_parse_rejects_unknown() {
        assert_eq!(SecurityLevel::parse("paranoid"), None);
        assert_eq!(SecurityLevel::parse(""), None);
        // Case-sensitive on purpose: the wire format is lowercase.
        assert_eq!(SecurityLevel::parse("Basic"), None);
    }

    #[test]
    fn security_level_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&SecurityLevel::Maximum).unwrap(),
            r#""maximum""#
        );
        let parsed: SecurityLevel = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(parsed, SecurityLevel::High);
    }

    #[test]
    fn security_level_display_matches_as_str() {
        assert_eq!(SecurityLevel::Standard.to_string(), "standard");
    }
}
