//! Security level policy: the token TTL table.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::types::SecurityLevel;

/// Maps each security tier to a token time-to-live.
///
/// The lookup is total: [`SecurityLevel`] is a closed enum, so an
/// unrecognized tier cannot reach the policy at all — wire input with an
/// unknown level string is rejected at decode time instead of defaulting to
/// a lax tier.
///
/// The default table matches production; deployments override it through
/// [`SecurityPolicyConfig`] (e.g. compressed TTLs for integration testing).
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use eviden_core::token::{SecurityLevel, SecurityPolicy};
///
/// let policy = SecurityPolicy::default();
/// assert_eq!(policy.ttl(SecurityLevel::Maximum), Duration::seconds(30));
///
/// let compressed = SecurityPolicy::default()
///     .with_ttl(SecurityLevel::Maximum, Duration::milliseconds(50));
/// assert_eq!(compressed.ttl(SecurityLevel::Maximum), Duration::milliseconds(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityPolicy {
    basic: Duration,
    standard: Duration,
    high: Duration,
    maximum: Duration,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            basic: Duration::hours(24),
            standard: Duration::minutes(5),
            high: Duration::minutes(1),
            maximum: Duration::seconds(30),
        }
    }
}

impl SecurityPolicy {
    /// Returns the token TTL for the given security tier.
    #[must_use]
    pub const fn ttl(&self, level: SecurityLevel) -> Duration {
        match level {
            SecurityLevel::Basic => self.basic,
            SecurityLevel::Standard => self.standard,
            SecurityLevel::High => self.high,
            SecurityLevel::Maximum => self.maximum,
        }
    }

    /// Returns a copy of this policy with one tier's TTL replaced.
    #[must_use]
    pub const fn with_ttl(mut self, level: SecurityLevel, ttl: Duration) -> Self {
        match level {
            SecurityLevel::Basic => self.basic = ttl,
            SecurityLevel::Standard => self.standard = ttl,
            SecurityLevel::High => self.high = ttl,
            SecurityLevel::Maximum => self.maximum = ttl,
        }
        self
    }
}

/// External configuration shape for [`SecurityPolicy`].
///
/// TTLs are expressed in whole seconds, which is the resolution operators
/// actually tune at. Defaults mirror [`SecurityPolicy::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityPolicyConfig {
    /// TTL for [`SecurityLevel::Basic`], in seconds.
    pub basic_ttl_secs: u32,
    /// TTL for [`SecurityLevel::Standard`], in seconds.
    pub standard_ttl_secs: u32,
    /// TTL for [`SecurityLevel::High`], in seconds.
    pub high_ttl_secs: u32,
    /// TTL for [`SecurityLevel::Maximum`], in seconds.
    pub maximum_ttl_secs: u32,
}

impl Default for SecurityPolicyConfig {
    fn default() -> Self {
        Self {
            basic_ttl_secs: 24 * 60 * 60,
            standard_ttl_secs: 5 * 60,
            high_ttl_secs: 60,
            maximum_ttl_secs: 30,
        }
    }
}

impl From<SecurityPolicyConfig> for SecurityPolicy {
    fn from(config: SecurityPolicyConfig) -> Self {
        Self {
            basic: Duration::seconds(i64::from(config.basic_ttl_secs)),
            standard: Duration::seconds(i64::from(config.standard_ttl_secs)),
            high: Duration::seconds(i64::from(config.high_ttl_secs)),
            maximum: Duration::seconds(i64::from(config.maximum_ttl_secs)),
        }
    }
}
