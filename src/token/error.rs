//! Error types for token encoding, decoding, and validation.
//!
//! Every variant is a terminal, reported outcome. Nothing here is used for
//! control flow elsewhere in the system; the coordinator translates these
//! one-to-one into typed check-in rejections.

use chrono::Duration;
use thiserror::Error;

use crate::event::EventId;

use super::types::SecurityLevel;

/// Errors produced while decoding or validating a check-in token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The payload's structural shape is wrong: not JSON, a broken URI
    /// wrapper, or fields of the wrong type.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A required field is absent from the payload.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The security level string is not a recognized tier. Fails closed:
    /// configuration mistakes surface to operators instead of silently
    /// degrading to a lax policy.
    #[error("unknown security level: {0}")]
    UnknownSecurityLevel(String),

    /// Token age exceeds the TTL for its security level.
    #[error("token expired: age {age_ms} ms exceeds ttl {ttl_ms} ms")]
    Expired {
        /// Token age at validation time, in milliseconds.
        age_ms: i64,
        /// Allowed TTL for the token's security level, in milliseconds.
        ttl_ms: i64,
    },

    /// Token claims an issuance instant in the future (clock skew or
    /// tampering).
    #[error("token issued {skew_ms} ms in the future")]
    FutureIssued {
        /// How far ahead of the validation clock the token claims to be.
        skew_ms: i64,
    },

    /// Token belongs to a different event.
    #[error("token is for event {actual}, expected {expected}")]
    WrongEvent {
        /// The event the validator was asked to check against.
        expected: EventId,
        /// The event the token names.
        actual: EventId,
    },

    /// Token was issued under a different security tier than the event is
    /// configured with. Operator-facing, like a policy misconfiguration.
    #[error("token security level {actual} does not match event level {expected}")]
    SecurityLevelMismatch {
        /// The event's configured tier.
        expected: SecurityLevel,
        /// The tier the token claims.
        actual: SecurityLevel,
    },

    /// The integrity value is malformed or its MAC does not verify.
    #[error("token integrity check failed")]
    Forged,
}

impl TokenError {
    /// Builds an [`TokenError::Expired`] from durations.
    #[must_use]
    pub fn expired(age: Duration, ttl: Duration) -> Self {
        Self::Expired {
            age_ms: age.num_milliseconds(),
            ttl_ms: ttl.num_milliseconds(),
        }
    }
}

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
