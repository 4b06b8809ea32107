//! Signing and verification policy.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_NONCE_ATTEMPTS;

/// How the engine treats the `s` component of a signature.
///
/// `(r, s)` and `(r, n - s)` both verify, so protocols that need a unique
/// encoding pin `s` to the lower half of the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowSPolicy {
    /// Sign with whatever `s` comes out; accept either half when verifying.
    #[default]
    Ignore,
    /// Normalize `s` to the lower half when signing; accept either half when
    /// verifying.
    Normalize,
    /// Normalize when signing and reject high-`s` signatures when verifying.
    Enforce,
}

impl LowSPolicy {
    #[inline]
    pub(crate) fn normalizes(self) -> bool {
        matches!(self, LowSPolicy::Normalize | LowSPolicy::Enforce)
    }
}

/// Engine configuration.
///
/// Missing fields fall back to their defaults when deserializing:
///
/// ```
/// use ecdsa::{EcdsaConfig, LowSPolicy};
///
/// let config: EcdsaConfig = serde_json::from_str(r#"{ "low_s": "enforce" }"#).unwrap();
/// assert_eq!(config.low_s, LowSPolicy::Enforce);
/// assert_eq!(config.max_nonce_attempts, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcdsaConfig {
    pub low_s: LowSPolicy,
    /// Nonce draws allowed per signature before signing fails.
    pub max_nonce_attempts: u32,
}

impl Default for EcdsaConfig {
    fn default() -> Self {
        EcdsaConfig {
            low_s: LowSPolicy::default(),
            max_nonce_attempts: DEFAULT_MAX_NONCE_ATTEMPTS,
        }
    }
}

impl EcdsaConfig {
    pub fn with_low_s(mut self, low_s: LowSPolicy) -> Self {
        self.low_s = low_s;
        self
    }

    pub fn with_max_nonce_attempts(mut self, attempts: u32) -> Self {
        self.max_nonce_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EcdsaConfig::default();
        assert_eq!(config.low_s, LowSPolicy::Ignore);
        assert_eq!(config.max_nonce_attempts, DEFAULT_MAX_NONCE_ATTEMPTS);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EcdsaConfig = serde_json::from_str(r#"{ "max_nonce_attempts": 4 }"#).unwrap();
        assert_eq!(config, EcdsaConfig::default().with_max_nonce_attempts(4));

        let config: EcdsaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EcdsaConfig::default());
    }

    #[test]
    fn test_reject_unknown_policy() {
        assert!(serde_json::from_str::<EcdsaConfig>(r#"{ "low_s": "sometimes" }"#).is_err());
    }

    #[test]
    fn test_policy_normalizes() {
        assert!(!LowSPolicy::Ignore.normalizes());
        assert!(LowSPolicy::Normalize.normalizes());
        assert!(LowSPolicy::Enforce.normalizes());
    }
}
