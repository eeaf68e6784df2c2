//! Token issuance and the shared issuer key.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::event::EventId;

use super::types::{CheckInToken, SecurityLevel};

type HmacSha256 = Hmac<Sha256>;

/// Length of the random nonce inside each integrity value, in bytes.
pub(crate) const NONCE_LEN: usize = 16;

/// Length of the HMAC-SHA256 tag, in bytes.
pub(crate) const MAC_LEN: usize = 32;

/// Shared secret between token issuer and validator.
///
/// 32 bytes of key material, wiped from memory on drop. Operators
/// distribute the key as a hex string; [`IssuerKey::generate`] mints a
/// fresh one from the OS RNG.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct IssuerKey([u8; 32]);

impl IssuerKey {
    /// Generates a fresh random key from the operating system RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Constructs a key from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parses a key from its 64-character hex representation.
    ///
    /// # Errors
    ///
    /// Returns the underlying hex error if the string is not exactly 32
    /// bytes of valid hex.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Renders the key as hex for operator configuration.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for IssuerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IssuerKey").field(&"<redacted>").finish()
    }
}

/// Computes the HMAC tag over a token's authenticated fields and nonce.
///
/// The canonical input is `event_id \n timestamp_ms \n level \n` followed by
/// the raw nonce bytes. Newline separators keep field boundaries
/// unambiguous (event ids cannot contain newlines on the wire; they travel
/// inside JSON strings).
pub(crate) fn compute_mac(
    key: &IssuerKey,
    event_id: &EventId,
    issued_at: DateTime<Utc>,
    level: SecurityLevel,
    nonce: &[u8],
) -> [u8; MAC_LEN] {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(event_id.as_str().as_bytes());
    mac.update(b"\n");
    mac.update(issued_at.timestamp_millis().to_string().as_bytes());
    mac.update(b"\n");
    mac.update(level.as_str().as_bytes());
    mac.update(b"\n");
    mac.update(nonce);
    mac.finalize().into_bytes().into()
}

/// Mints fresh check-in tokens for an event and security tier.
///
/// Stateless and side-effect-free: two calls with the same inputs at the
/// same instant produce tokens identical in every field except the
/// integrity value, which carries a fresh random nonce.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use eviden_core::event::EventId;
/// use eviden_core::token::{IssuerKey, SecurityLevel, TokenIssuer};
///
/// let issuer = TokenIssuer::new(IssuerKey::generate());
/// let token = issuer.issue(&EventId::new("evt_1"), SecurityLevel::High, Utc::now());
/// assert_eq!(token.security_level, SecurityLevel::High);
/// ```
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    key: IssuerKey,
}

impl TokenIssuer {
    /// Creates an issuer bound to the given key.
    #[must_use]
    pub const fn new(key: IssuerKey) -> Self {
        Self { key }
    }

    /// Issues a token for the event and tier, stamped `issued_at = now`.
    #[must_use]
    pub fn issue(
        &self,
        event_id: &EventId,
        level: SecurityLevel,
        now: DateTime<Utc>,
    ) -> CheckInToken {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let mac = compute_mac(&self.key, event_id, now, level, &nonce);

        let mut raw = Vec::with_capacity(NONCE_LEN + MAC_LEN);
        raw.extend_from_slice(&nonce);
        raw.extend_from_slice(&mac);

        CheckInToken {
            event_id: event_id.clone(),
            issued_at: now,
            security_level: level,
            integrity: URL_SAFE_NO_PAD.encode(raw),
        }
    }
}
