//! Pluggable JSON Web Token signing algorithms
//!
//! This crate provides:
//! - The [`Algorithm`] capability trait token encoders and decoders program against
//! - RS256 (and RS384/RS512) over RSASSA-PKCS1-v1_5, verify-only or sign-and-verify
//! - Construction from raw keys, optional keys, or certificate-held key material
//! - Structured errors with a branchable [`ErrorKind`]
//!
//! The crate only ever sees the signing input bytes. Base64url, JSON headers and
//! the token pipeline live with the caller.
//!
//! ```no_run
//! use jwt_algorithms::{Algorithm, AsymmetricAlgorithm, Rs256Algorithm, RsaPublicKey};
//! # fn demo(private_key: jwt_algorithms::RsaPrivateKey) -> jwt_algorithms::AlgorithmResult<()> {
//! let public_key = RsaPublicKey::from(&private_key);
//! let signer = Rs256Algorithm::new(public_key.clone(), private_key)?;
//! let verifier = Rs256Algorithm::verify_only(public_key);
//!
//! let signature = signer.sign_data(b"header.payload")?;
//! assert!(verifier.verify(b"header.payload", &signature)?);
//! assert!(verifier.sign_data(b"header.payload").is_err());
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
pub mod keys;
mod name;
pub mod registry;
pub mod rsa_pkcs1;
mod traits;

#[cfg(test)]
mod test_keys;

pub use config::{AlgorithmConfig, SecretPolicy};
pub use error::*;
pub use keys::{KeyBundle, KeySource};
pub use name::AlgorithmName;
pub use rsa_pkcs1::{Rs256Algorithm, Rs384Algorithm, Rs512Algorithm, RsaPkcs1Algorithm};
pub use traits::{Algorithm, AsymmetricAlgorithm};

// Key types callers construct instances from
pub use rsa::{RsaPrivateKey, RsaPublicKey};
