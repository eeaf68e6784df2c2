//! Time-rotating check-in tokens.
//!
//! A check-in token proves that its holder saw the event's QR display
//! within the last TTL window. The pieces:
//!
//! - [`SecurityLevel`] + [`SecurityPolicy`] — how fast codes rotate
//! - [`codec`] — wire format (bare JSON or `eviden://checkin?data=…` URI)
//! - [`TokenIssuer`] — mints MAC'd tokens with a fresh nonce per issue
//! - [`TokenValidator`] — binding, integrity, and freshness in one step
//!
//! Tokens are stateless: nothing is persisted at issuance, and validity is
//! a pure function of the token's own fields, the shared [`IssuerKey`], and
//! the caller-supplied clock. There are no timers anywhere — rotation is
//! purely time-derived.

pub mod codec;
pub mod error;
pub mod issuer;
pub mod policy;
pub mod types;
pub mod validator;

pub use error::TokenError;
pub use issuer::{IssuerKey, TokenIssuer};
pub use policy::{SecurityPolicy, SecurityPolicyConfig};
pub use types::{CheckInToken, SecurityLevel};
pub use validator::TokenValidator;
