//! Wire codec for the QR-carried check-in payload.
//!
//! The payload travels in one of two equivalent forms:
//!
//! - bare JSON: `{"eventId":"…","token":"…","timestamp":1700000000000,"securityLevel":"high"}`
//! - URI-wrapped: `eviden://checkin?data=<percent-encoded JSON>`
//!
//! `timestamp` is integer milliseconds since the Unix epoch. Decoding is
//! strictly structural: freshness, event binding, and integrity are the
//! validator's job, never the codec's.

use chrono::{DateTime, TimeZone, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

use crate::event::EventId;

use super::error::{Result, TokenError};
use super::types::{CheckInToken, SecurityLevel};

/// URI scheme and path prefix for wrapped payloads.
const URI_PREFIX: &str = "eviden://checkin";

/// Serialized wire shape. Field names are part of the QR format.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WirePayload<'a> {
    event_id: &'a str,
    token: &'a str,
    timestamp: i64,
    security_level: &'a str,
}

/// Encodes a token into the bare JSON wire form.
///
/// Deterministic and reversible: decoding the output yields an equal token.
///
/// # Panics
///
/// Never panics in practice; the wire struct contains only strings and an
/// integer, which `serde_json` always serializes.
#[must_use]
pub fn encode(token: &CheckInToken) -> String {
    let payload = WirePayload {
        event_id: token.event_id.as_str(),
        token: &token.integrity,
        timestamp: token.issued_at.timestamp_millis(),
        security_level: token.security_level.as_str(),
    };
    serde_json::to_string(&payload).unwrap_or_default()
}

/// Encodes a token into the URI-wrapped wire form
/// (`eviden://checkin?data=…`).
#[must_use]
pub fn encode_uri(token: &CheckInToken) -> String {
    let json = encode(token);
    format!(
        "{URI_PREFIX}?data={}",
        utf8_percent_encode(&json, NON_ALPHANUMERIC)
    )
}

/// Decodes a scanned payload in either wire form into a [`CheckInToken`].
///
/// # Errors
///
/// - [`TokenError::MalformedPayload`] if the structural shape is wrong:
///   invalid JSON, a broken URI wrapper, fields of the wrong type, or a
///   timestamp outside the representable range.
/// - [`TokenError::MissingField`] if `eventId`, `token`, `timestamp`, or
///   `securityLevel` is absent.
/// - [`TokenError::UnknownSecurityLevel`] if the level string is not a
///   recognized tier.
pub fn decode(payload: &str) -> Result<CheckInToken> {
    let trimmed = payload.trim();
    let json = if trimmed.starts_with(URI_PREFIX) {
        unwrap_uri(trimmed)?
    } else {
        trimmed.to_string()
    };

    let value: Value = serde_json::from_str(&json)
        .map_err(|e| TokenError::MalformedPayload(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(TokenError::MalformedPayload(
            "payload is not a JSON object".to_string(),
        ));
    };

    let event_id = fields
        .get("eventId")
        .ok_or(TokenError::MissingField("eventId"))?
        .as_str()
        .ok_or_else(|| TokenError::MalformedPayload("eventId is not a string".to_string()))?;
    let integrity = fields
        .get("token")
        .ok_or(TokenError::MissingField("token"))?
        .as_str()
        .ok_or_else(|| TokenError::MalformedPayload("token is not a string".to_string()))?;
    let timestamp_ms = fields
        .get("timestamp")
        .ok_or(TokenError::MissingField("timestamp"))?
        .as_i64()
        .ok_or_else(|| {
            TokenError::MalformedPayload("timestamp is not an integer".to_string())
        })?;
    let level_str = fields
        .get("securityLevel")
        .ok_or(TokenError::MissingField("securityLevel"))?
        .as_str()
        .ok_or_else(|| {
            TokenError::MalformedPayload("securityLevel is not a string".to_string())
        })?;

    let security_level = SecurityLevel::parse(level_str)
        .ok_or_else(|| TokenError::UnknownSecurityLevel(level_str.to_string()))?;
    let issued_at = millis_to_instant(timestamp_ms)?;

    Ok(CheckInToken {
        event_id: EventId::new(event_id),
        issued_at,
        security_level,
        integrity: integrity.to_string(),
    })
}

/// Extracts the JSON document from a `eviden://checkin?data=…` wrapper.
fn unwrap_uri(uri: &str) -> Result<String> {
    let rest = &uri[URI_PREFIX.len()..];
    let query = rest.strip_prefix('?').ok_or_else(|| {
        TokenError::MalformedPayload("check-in URI has no query string".to_string())
    })?;

    let encoded = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .ok_or_else(|| {
            TokenError::MalformedPayload("check-in URI has no data parameter".to_string())
        })?;

    percent_decode_str(encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| TokenError::MalformedPayload(format!("data parameter is not UTF-8: {e}")))
}

/// Converts wire milliseconds into an instant, rejecting out-of-range values.
fn millis_to_instant(ms: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| TokenError::MalformedPayload(format!("timestamp {ms} out of range")))
}
