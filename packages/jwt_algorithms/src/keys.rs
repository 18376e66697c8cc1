//! RSA key material sources
//!
//! Contains the accessor trait algorithms are built from and a PEM/DER-backed
//! bundle implementing it, plus the key checks applied at construction.

use crate::error::{AlgorithmError, AlgorithmResult, KeyRole};
use crate::name::AlgorithmName;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;

/// Accessor over certificate-held key material.
///
/// Certificate loading and parsing happen outside this crate; anything that
/// can hand over an RSA public key (and possibly the matching private key)
/// implements this.
pub trait KeySource {
    /// The RSA public key, if the source carries one.
    fn public_key(&self) -> Option<RsaPublicKey>;

    /// The RSA private key, if the source carries one.
    fn private_key(&self) -> Option<RsaPrivateKey>;
}

impl<T: KeySource + ?Sized> KeySource for &T {
    fn public_key(&self) -> Option<RsaPublicKey> {
        (**self).public_key()
    }

    fn private_key(&self) -> Option<RsaPrivateKey> {
        (**self).private_key()
    }
}

/// Key pair assembled from encoded key files.
///
/// A bundle holding only a private key reports the derived public key.
#[derive(Clone, Default)]
pub struct KeyBundle {
    public_key: Option<RsaPublicKey>,
    private_key: Option<RsaPrivateKey>,
}

impl KeyBundle {
    /// Empty bundle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle from a PEM private key (`PRIVATE KEY` or `RSA PRIVATE KEY`)
    ///
    /// # Errors
    /// `KeyEncoding` when neither PKCS#8 nor PKCS#1 decoding succeeds.
    pub fn from_private_key_pem(pem: &str) -> AlgorithmResult<Self> {
        let key = RsaPrivateKey::from_pkcs8_pem(pem).or_else(|pkcs8_err| {
            RsaPrivateKey::from_pkcs1_pem(pem)
                .map_err(|_| AlgorithmError::key_encoding(KeyRole::Private, pkcs8_err))
        })?;
        Ok(Self::new().with_private_key(key))
    }

    /// Bundle from a DER private key (PKCS#8 or PKCS#1)
    ///
    /// # Errors
    /// `KeyEncoding` when neither PKCS#8 nor PKCS#1 decoding succeeds.
    pub fn from_private_key_der(der: &[u8]) -> AlgorithmResult<Self> {
        let key = RsaPrivateKey::from_pkcs8_der(der).or_else(|pkcs8_err| {
            RsaPrivateKey::from_pkcs1_der(der)
                .map_err(|_| AlgorithmError::key_encoding(KeyRole::Private, pkcs8_err))
        })?;
        Ok(Self::new().with_private_key(key))
    }

    /// Bundle from a PEM public key (`PUBLIC KEY` or `RSA PUBLIC KEY`)
    ///
    /// # Errors
    /// `KeyEncoding` when neither SPKI nor PKCS#1 decoding succeeds.
    pub fn from_public_key_pem(pem: &str) -> AlgorithmResult<Self> {
        let key = RsaPublicKey::from_public_key_pem(pem).or_else(|spki_err| {
            RsaPublicKey::from_pkcs1_pem(pem)
                .map_err(|_| AlgorithmError::key_encoding(KeyRole::Public, spki_err))
        })?;
        Ok(Self::new().with_public_key(key))
    }

    /// Bundle from a DER public key (SPKI or PKCS#1)
    ///
    /// # Errors
    /// `KeyEncoding` when neither SPKI nor PKCS#1 decoding succeeds.
    pub fn from_public_key_der(der: &[u8]) -> AlgorithmResult<Self> {
        let key = RsaPublicKey::from_public_key_der(der).or_else(|spki_err| {
            RsaPublicKey::from_pkcs1_der(der)
                .map_err(|_| AlgorithmError::key_encoding(KeyRole::Public, spki_err))
        })?;
        Ok(Self::new().with_public_key(key))
    }

    /// Set the public key
    #[must_use]
    pub fn with_public_key(mut self, key: RsaPublicKey) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Set the private key
    #[must_use]
    pub fn with_private_key(mut self, key: RsaPrivateKey) -> Self {
        self.private_key = Some(key);
        self
    }
}

impl KeySource for KeyBundle {
    fn public_key(&self) -> Option<RsaPublicKey> {
        self.public_key
            .clone()
            .or_else(|| self.private_key.as_ref().map(RsaPublicKey::from))
    }

    fn private_key(&self) -> Option<RsaPrivateKey> {
        self.private_key.clone()
    }
}

impl fmt::Debug for KeyBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBundle")
            .field("public_key", &self.public_key.is_some())
            .field("private_key", &self.private_key.is_some())
            .finish()
    }
}

/// Modulus size of `key` in bits
#[inline]
pub(crate) fn modulus_bits(key: &RsaPublicKey) -> usize {
    key.n().bits()
}

/// Reject moduli below the configured floor
pub(crate) fn check_modulus(
    algorithm: AlgorithmName,
    key: &RsaPublicKey,
    min_bits: Option<usize>,
) -> AlgorithmResult<()> {
    let bits = modulus_bits(key);
    match min_bits {
        Some(min) if bits < min => Err(AlgorithmError::invalid_key(
            algorithm,
            format!("RSA modulus must be at least {min} bits, got {bits}"),
        )),
        _ => Ok(()),
    }
}

/// Reject a private key whose public half is not `public_key`
pub(crate) fn check_pair(
    algorithm: AlgorithmName,
    public_key: &RsaPublicKey,
    private_key: &RsaPrivateKey,
) -> AlgorithmResult<()> {
    if RsaPublicKey::from(private_key) == *public_key {
        Ok(())
    } else {
        Err(AlgorithmError::invalid_key(
            algorithm,
            "private key does not match public key",
        ))
    }
}
