//! Token validation: binding, integrity, and freshness checks.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;

use crate::event::Event;

use super::codec;
use super::error::{Result, TokenError};
use super::issuer::{compute_mac, IssuerKey, MAC_LEN, NONCE_LEN};
use super::policy::SecurityPolicy;
use super::types::CheckInToken;

/// Validates decoded tokens against an event and the current time.
///
/// Validation is terminal in one step: a token is either valid or rejected
/// with exactly one [`TokenError`]. Checks run in a fixed order so that the
/// reported rejection is deterministic:
///
/// 1. event binding (`WrongEvent`)
/// 2. security tier binding (`SecurityLevelMismatch`)
/// 3. integrity (`Forged`)
/// 4. future-dated issuance (`FutureIssued`)
/// 5. freshness (`Expired`) — age exactly equal to the TTL is still valid
///
/// Event binding is checked first: a token for a different event is
/// `WrongEvent` regardless of its freshness or integrity.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use eviden_core::event::{Event, EventId};
/// use eviden_core::geo::{Coordinates, VenueSize, VenueType};
/// use eviden_core::token::{IssuerKey, SecurityLevel, SecurityPolicy, TokenIssuer, TokenValidator};
///
/// let key = IssuerKey::generate();
/// let issuer = TokenIssuer::new(key.clone());
/// let validator = TokenValidator::new(key, SecurityPolicy::default());
///
/// let now = Utc::now();
/// let event = Event::new(
///     EventId::new("evt_1"),
///     Coordinates::new(52.52, 13.405).unwrap(),
///     100.0,
///     VenueType::Indoor,
///     VenueSize::Medium,
///     500,
///     SecurityLevel::High,
///     now - chrono::Duration::hours(1),
///     now + chrono::Duration::hours(1),
/// )
/// .unwrap();
///
/// let token = issuer.issue(event.id(), SecurityLevel::High, now);
/// assert!(validator.validate(&token, &event, now).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TokenValidator {
    key: IssuerKey,
    policy: SecurityPolicy,
}

impl TokenValidator {
    /// Creates a validator sharing the issuer's key, with the given TTL
    /// policy.
    #[must_use]
    pub const fn new(key: IssuerKey, policy: SecurityPolicy) -> Self {
        Self { key, policy }
    }

    /// The TTL policy this validator applies.
    #[must_use]
    pub const fn policy(&self) -> &SecurityPolicy {
        &self.policy
    }

    /// Decodes a raw scanned payload and validates the result.
    ///
    /// # Errors
    ///
    /// Propagates decode failures (`MalformedPayload`, `MissingField`,
    /// `UnknownSecurityLevel`) and every rejection [`validate`](Self::validate)
    /// can produce.
    pub fn validate_payload(
        &self,
        payload: &str,
        event: &Event,
        now: DateTime<Utc>,
    ) -> Result<CheckInToken> {
        let token = codec::decode(payload)?;
        self.validate(&token, event, now)?;
        Ok(token)
    }

    /// Validates an already-decoded token against the event and `now`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check in the documented order.
    pub fn validate(&self, token: &CheckInToken, event: &Event, now: DateTime<Utc>) -> Result<()> {
        if token.event_id != *event.id() {
            return Err(TokenError::WrongEvent {
                expected: event.id().clone(),
                actual: token.event_id.clone(),
            });
        }

        if token.security_level != event.security_level() {
            return Err(TokenError::SecurityLevelMismatch {
                expected: event.security_level(),
                actual: token.security_level,
            });
        }

        self.verify_integrity(token)?;

        let age = now.signed_duration_since(token.issued_at);
        if age < chrono::Duration::zero() {
            return Err(TokenError::FutureIssued {
                skew_ms: -age.num_milliseconds(),
            });
        }

        let ttl = self.policy.ttl(token.security_level);
        if age > ttl {
            return Err(TokenError::expired(age, ttl));
        }

        Ok(())
    }

    /// Recomputes the token MAC and compares in constant time.
    fn verify_integrity(&self, token: &CheckInToken) -> Result<()> {
        let raw = URL_SAFE_NO_PAD
            .decode(&token.integrity)
            .map_err(|_| TokenError::Forged)?;
        if raw.len() != NONCE_LEN + MAC_LEN {
            return Err(TokenError::Forged);
        }

        let (nonce, claimed_mac) = raw.split_at(NONCE_LEN);
        let expected = compute_mac(
            &self.key,
            &token.event_id,
            token.issued_at,
            token.security_level,
            nonce,
        );

        if bool::from(expected.as_slice().ct_eq(claimed_mac)) {
            Ok(())
        } else {
            Err(TokenError::Forged)
        }
    }
}
