//! Algorithm identity as written into the token header `alg` field

use crate::error::AlgorithmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named signing algorithm.
///
/// The string form is stable and is exactly what appears in the JWT header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum AlgorithmName {
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,
}

impl AlgorithmName {
    /// Every implemented algorithm, in header-name order
    pub const ALL: [AlgorithmName; 3] = [
        AlgorithmName::RS256,
        AlgorithmName::RS384,
        AlgorithmName::RS512,
    ];

    /// Header `alg` value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AlgorithmName::RS256 => "RS256",
            AlgorithmName::RS384 => "RS384",
            AlgorithmName::RS512 => "RS512",
        }
    }

    /// `true` for public/private-key schemes
    #[must_use]
    pub const fn is_asymmetric(self) -> bool {
        match self {
            AlgorithmName::RS256 | AlgorithmName::RS384 | AlgorithmName::RS512 => true,
        }
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmName {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| AlgorithmError::unsupported_algorithm(s))
    }
}

impl AsRef<str> for AlgorithmName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
