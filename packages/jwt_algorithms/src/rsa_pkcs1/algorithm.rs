//! RSASSA-PKCS1-v1_5 signing algorithm bound to one key pair

use super::hash::Pkcs1Digest;
use crate::config::{AlgorithmConfig, SecretPolicy};
use crate::error::{AlgorithmError, AlgorithmResult, KeyRole};
use crate::keys::{self, KeySource};
use crate::name::AlgorithmName;
use crate::traits::{Algorithm, AsymmetricAlgorithm};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use tracing::{debug, trace, warn};

/// RS256: RSASSA-PKCS1-v1_5 with SHA-256
pub type Rs256Algorithm = RsaPkcs1Algorithm<Sha256>;
/// RS384: RSASSA-PKCS1-v1_5 with SHA-384
pub type Rs384Algorithm = RsaPkcs1Algorithm<Sha384>;
/// RS512: RSASSA-PKCS1-v1_5 with SHA-512
pub type Rs512Algorithm = RsaPkcs1Algorithm<Sha512>;

/// RSA PKCS#1 v1.5 algorithm pinned to a public key and, optionally, its private key.
///
/// Without a private key the instance is verify-only and `sign` fails with
/// `CannotSign`. Immutable after construction, so one instance can be shared
/// across threads behind an `Arc`.
#[derive(Clone)]
pub struct RsaPkcs1Algorithm<D: Pkcs1Digest> {
    verifying_key: VerifyingKey<D>,
    signing_key: Option<SigningKey<D>>,
    modulus_bits: usize,
    config: AlgorithmConfig,
}

impl<D: Pkcs1Digest> RsaPkcs1Algorithm<D> {
    /// Sign-and-verify instance from a key pair.
    ///
    /// # Errors
    /// `InvalidKey` when `private_key` is not the private half of `public_key`.
    pub fn new(public_key: RsaPublicKey, private_key: RsaPrivateKey) -> AlgorithmResult<Self> {
        Self::with_config(public_key, Some(private_key), AlgorithmConfig::default())
    }

    /// Verify-only instance.
    #[must_use]
    pub fn verify_only(public_key: RsaPublicKey) -> Self {
        Self::build(public_key, None, AlgorithmConfig::default())
    }

    /// Instance from keys that may be absent.
    ///
    /// # Errors
    /// `MissingKey` when `public_key` is `None`, whatever `private_key` holds.
    pub fn from_parts(
        public_key: Option<RsaPublicKey>,
        private_key: Option<RsaPrivateKey>,
    ) -> AlgorithmResult<Self> {
        Self::from_parts_with_config(public_key, private_key, AlgorithmConfig::default())
    }

    /// Instance from certificate-held key material.
    ///
    /// # Errors
    /// `MissingKey` when the source has no RSA public key; `InvalidKey` when
    /// its private key does not match.
    pub fn from_key_source<S: KeySource + ?Sized>(source: &S) -> AlgorithmResult<Self> {
        Self::from_key_source_with_config(source, AlgorithmConfig::default())
    }

    /// [`from_parts`](Self::from_parts) with an explicit configuration.
    ///
    /// # Errors
    /// As for [`from_parts`](Self::from_parts) and [`with_config`](Self::with_config).
    pub fn from_parts_with_config(
        public_key: Option<RsaPublicKey>,
        private_key: Option<RsaPrivateKey>,
        config: AlgorithmConfig,
    ) -> AlgorithmResult<Self> {
        let public_key =
            public_key.ok_or_else(|| AlgorithmError::missing_key(D::ALGORITHM, KeyRole::Public))?;
        Self::with_config(public_key, private_key, config)
    }

    /// [`from_key_source`](Self::from_key_source) with an explicit configuration.
    ///
    /// # Errors
    /// As for [`from_key_source`](Self::from_key_source) and [`with_config`](Self::with_config).
    pub fn from_key_source_with_config<S: KeySource + ?Sized>(
        source: &S,
        config: AlgorithmConfig,
    ) -> AlgorithmResult<Self> {
        Self::from_parts_with_config(source.public_key(), source.private_key(), config)
    }

    /// Instance from a public key, an optional private key and a configuration.
    ///
    /// Every other constructor ends up here.
    ///
    /// # Errors
    /// `InvalidKey` when the modulus is below `config.min_modulus_bits` or the
    /// private key does not match the public key.
    pub fn with_config(
        public_key: RsaPublicKey,
        private_key: Option<RsaPrivateKey>,
        config: AlgorithmConfig,
    ) -> AlgorithmResult<Self> {
        keys::check_modulus(D::ALGORITHM, &public_key, config.min_modulus_bits)?;
        if let Some(private_key) = &private_key {
            keys::check_pair(D::ALGORITHM, &public_key, private_key)?;
        }
        Ok(Self::build(public_key, private_key, config))
    }

    fn build(
        public_key: RsaPublicKey,
        private_key: Option<RsaPrivateKey>,
        config: AlgorithmConfig,
    ) -> Self {
        let modulus_bits = keys::modulus_bits(&public_key);
        let signing_key = private_key.map(D::signing_key);

        debug!(
            algorithm = %D::ALGORITHM,
            modulus_bits,
            can_sign = signing_key.is_some(),
            "Constructed RSA PKCS#1 v1.5 algorithm"
        );

        Self {
            verifying_key: D::verifying_key(public_key),
            signing_key,
            modulus_bits,
            config,
        }
    }

    /// Bound verification key
    #[must_use]
    pub fn public_key(&self) -> &RsaPublicKey {
        self.verifying_key.as_ref()
    }

    /// Modulus size of the bound key pair in bits
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Configuration this instance was built with
    #[must_use]
    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }
}

impl<D: Pkcs1Digest> Algorithm for RsaPkcs1Algorithm<D> {
    fn name(&self) -> AlgorithmName {
        D::ALGORITHM
    }

    fn is_asymmetric(&self) -> bool {
        true
    }

    fn sign(&self, secret: Option<&[u8]>, data: &[u8]) -> AlgorithmResult<Vec<u8>> {
        if secret.is_some() {
            match self.config.secret_policy {
                SecretPolicy::Ignore => {
                    debug!(
                        algorithm = %D::ALGORITHM,
                        "Ignoring shared secret passed to asymmetric sign"
                    );
                }
                SecretPolicy::Reject => {
                    warn!(
                        algorithm = %D::ALGORITHM,
                        "Rejecting shared secret passed to asymmetric sign"
                    );
                    return Err(AlgorithmError::UnexpectedSecret {
                        algorithm: D::ALGORITHM,
                    });
                }
            }
        }
        self.sign_data(data)
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> AlgorithmResult<bool> {
        trace!(algorithm = %D::ALGORITHM, len = data.len(), "Verifying");

        let signature =
            Signature::try_from(signature).map_err(|e| AlgorithmError::MalformedSignature {
                algorithm: D::ALGORITHM,
                reason: e.to_string(),
            })?;

        match self.verifying_key.verify(data, &signature) {
            Ok(()) => Ok(true),
            Err(_) => {
                debug!(algorithm = %D::ALGORITHM, "Signature mismatch");
                Ok(false)
            }
        }
    }
}

impl<D: Pkcs1Digest> AsymmetricAlgorithm for RsaPkcs1Algorithm<D> {
    fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }

    fn sign_data(&self, data: &[u8]) -> AlgorithmResult<Vec<u8>> {
        let Some(signing_key) = &self.signing_key else {
            warn!(algorithm = %D::ALGORITHM, "Sign requested on verify-only instance");
            return Err(AlgorithmError::CannotSign {
                algorithm: D::ALGORITHM,
            });
        };

        trace!(algorithm = %D::ALGORITHM, len = data.len(), "Signing");

        let signature: Signature = signing_key
            .try_sign(data)
            .map_err(|e| AlgorithmError::Signing {
                algorithm: D::ALGORITHM,
                reason: e.to_string(),
            })?;
        Ok(signature.to_vec())
    }
}

impl<D: Pkcs1Digest> fmt::Debug for RsaPkcs1Algorithm<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPkcs1Algorithm")
            .field("algorithm", &D::ALGORITHM)
            .field("modulus_bits", &self.modulus_bits)
            .field("can_sign", &self.signing_key.is_some())
            .field("config", &self.config)
            .finish()
    }
}
