//! Error types for signing algorithm construction and use

use crate::name::AlgorithmName;
use std::fmt;
use thiserror::Error;

/// Result type for algorithm operations
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Which half of a key pair an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Verification key
    Public,
    /// Signing key
    Private,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => f.write_str("public"),
            KeyRole::Private => f.write_str("private"),
        }
    }
}

/// Coarse error category callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required key was not supplied
    ArgumentNull,
    /// Supplied material or configuration is unusable
    ArgumentInvalid,
    /// Signing was requested from a verify-only instance
    CannotSign,
    /// The underlying cryptographic primitive reported a fault
    Crypto,
}

/// Signing algorithm errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// A required key was absent at construction
    #[error("{algorithm}: missing required {role} key")]
    MissingKey {
        /// Algorithm being constructed
        algorithm: AlgorithmName,
        /// Which key was missing
        role: KeyRole,
    },

    /// Key material was present but unusable for this algorithm
    #[error("{algorithm}: invalid key material: {reason}")]
    InvalidKey {
        /// Algorithm being constructed
        algorithm: AlgorithmName,
        /// What was wrong with the key
        reason: String,
    },

    /// Key bytes could not be decoded
    #[error("Invalid {role} key encoding: {reason}")]
    KeyEncoding {
        /// Which key failed to decode
        role: KeyRole,
        /// Decoder message
        reason: String,
    },

    /// `sign` was called on an instance holding no private key
    #[error("{algorithm}: cannot sign, instance is verify-only (no private key bound)")]
    CannotSign {
        /// Algorithm that was asked to sign
        algorithm: AlgorithmName,
    },

    /// A shared secret was passed to an asymmetric algorithm under a strict policy
    #[error("{algorithm}: asymmetric algorithm does not accept a shared secret")]
    UnexpectedSecret {
        /// Algorithm that received the secret
        algorithm: AlgorithmName,
    },

    /// The `alg` name is not one this crate implements
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The signature bytes could not be interpreted by the primitive
    #[error("{algorithm}: malformed signature: {reason}")]
    MalformedSignature {
        /// Algorithm performing verification
        algorithm: AlgorithmName,
        /// Primitive message
        reason: String,
    },

    /// The primitive failed while producing a signature
    #[error("{algorithm}: signing failed: {reason}")]
    Signing {
        /// Algorithm performing the signature
        algorithm: AlgorithmName,
        /// Primitive message
        reason: String,
    },

    /// Configuration could not be loaded
    #[error("Invalid algorithm configuration: {0}")]
    Config(String),
}

impl AlgorithmError {
    /// Create a missing key error
    #[inline]
    #[must_use]
    pub fn missing_key(algorithm: AlgorithmName, role: KeyRole) -> Self {
        AlgorithmError::MissingKey { algorithm, role }
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(algorithm: AlgorithmName, reason: impl Into<String>) -> Self {
        AlgorithmError::InvalidKey {
            algorithm,
            reason: reason.into(),
        }
    }

    /// Create a key encoding error
    #[inline]
    #[must_use]
    pub fn key_encoding(role: KeyRole, reason: impl fmt::Display) -> Self {
        AlgorithmError::KeyEncoding {
            role,
            reason: reason.to_string(),
        }
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        AlgorithmError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlgorithmError::MissingKey { .. } => ErrorKind::ArgumentNull,
            AlgorithmError::InvalidKey { .. }
            | AlgorithmError::KeyEncoding { .. }
            | AlgorithmError::UnexpectedSecret { .. }
            | AlgorithmError::UnsupportedAlgorithm(_)
            | AlgorithmError::Config(_) => ErrorKind::ArgumentInvalid,
            AlgorithmError::CannotSign { .. } => ErrorKind::CannotSign,
            AlgorithmError::MalformedSignature { .. } | AlgorithmError::Signing { .. } => {
                ErrorKind::Crypto
            }
        }
    }

    /// Whether the caller can correct the call without rebuilding key material
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AlgorithmError::CannotSign { .. } | AlgorithmError::UnexpectedSecret { .. }
        )
    }
}
