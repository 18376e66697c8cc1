//! Algorithm construction and signing policy

use crate::error::{AlgorithmError, AlgorithmResult};
use serde::{Deserialize, Serialize};

/// RSA modulus size the library recommends for every RS* algorithm
pub const RECOMMENDED_MODULUS_BITS: usize = 2048;

/// What an asymmetric algorithm does with a shared secret passed to `sign`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretPolicy {
    /// Accept and disregard it
    #[default]
    Ignore,
    /// Fail with `UnexpectedSecret`
    Reject,
}

/// Per-instance algorithm configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Handling of secrets passed to asymmetric signers
    #[serde(default)]
    pub secret_policy: SecretPolicy,
    /// Smallest accepted RSA modulus; `None` accepts any size the primitive does
    #[serde(default)]
    pub min_modulus_bits: Option<usize>,
}

impl AlgorithmConfig {
    /// Strict secrets and the recommended 2048-bit modulus floor
    #[must_use]
    pub fn recommended() -> Self {
        Self {
            secret_policy: SecretPolicy::Reject,
            min_modulus_bits: Some(RECOMMENDED_MODULUS_BITS),
        }
    }

    /// Set the secret policy
    #[must_use]
    pub fn with_secret_policy(mut self, policy: SecretPolicy) -> Self {
        self.secret_policy = policy;
        self
    }

    /// Require at least `bits` of RSA modulus
    #[must_use]
    pub fn with_min_modulus_bits(mut self, bits: usize) -> Self {
        self.min_modulus_bits = Some(bits);
        self
    }

    /// Load from a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    /// `Config` when the document does not parse.
    pub fn from_json(json: &str) -> AlgorithmResult<Self> {
        serde_json::from_str(json).map_err(|e| AlgorithmError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        let config = AlgorithmConfig::default();
        assert_eq!(config.secret_policy, SecretPolicy::Ignore);
        assert_eq!(config.min_modulus_bits, None);
    }

    #[test]
    fn loads_partial_json() {
        let config = AlgorithmConfig::from_json(r#"{"secret_policy":"reject"}"#).unwrap();
        assert_eq!(config.secret_policy, SecretPolicy::Reject);
        assert_eq!(config.min_modulus_bits, None);

        let config = AlgorithmConfig::from_json(r#"{"min_modulus_bits":3072}"#).unwrap();
        assert_eq!(config.secret_policy, SecretPolicy::Ignore);
        assert_eq!(config.min_modulus_bits, Some(3072));

        assert_eq!(
            AlgorithmConfig::from_json("{}").unwrap(),
            AlgorithmConfig::default()
        );
    }

    #[test]
    fn rejects_bad_json() {
        let err = AlgorithmConfig::from_json(r#"{"secret_policy":"sometimes"}"#).unwrap_err();
        assert!(matches!(err, AlgorithmError::Config(_)));
    }

    #[test]
    fn recommended_round_trips() {
        let json = serde_json::to_string(&AlgorithmConfig::recommended()).unwrap();
        assert_eq!(
            AlgorithmConfig::from_json(&json).unwrap(),
            AlgorithmConfig::recommended()
        );
    }
}
