//! Signing algorithm capability traits.

use crate::{error::AlgorithmResult, name::AlgorithmName};
use std::sync::Arc;

/// Signing algorithm interface.
///
/// Token encoders and decoders hold one of these and never need to know which
/// scheme is behind it. `data` is always the exact signing input
/// (`base64url(header) "." base64url(payload)`), assembled by the caller.
/// Implementations must be thread-safe (Send + Sync).
pub trait Algorithm: Send + Sync {
    /// Header `alg` value.
    fn name(&self) -> AlgorithmName;

    /// `true` for public/private-key schemes, `false` for shared-secret schemes.
    fn is_asymmetric(&self) -> bool;

    /// Sign `data`.
    ///
    /// Symmetric schemes use `secret` as the shared key. Asymmetric schemes
    /// bind their key at construction and treat `secret` according to their
    /// configured policy.
    ///
    /// # Errors
    /// `CannotSign` when the instance holds no signing key; policy or
    /// primitive failures otherwise.
    fn sign(&self, secret: Option<&[u8]>, data: &[u8]) -> AlgorithmResult<Vec<u8>>;

    /// Check `signature` over `data` with the bound verification key.
    ///
    /// A well-formed signature that does not match yields `Ok(false)`.
    ///
    /// # Errors
    /// Only when the primitive cannot interpret the signature bytes at all.
    /// The RSA PKCS#1 variants never do: any byte string parses, and a wrong
    /// length or out-of-range value is reported as `Ok(false)`.
    fn verify(&self, data: &[u8], signature: &[u8]) -> AlgorithmResult<bool>;
}

/// Convenience surface for algorithms whose key is bound at construction.
pub trait AsymmetricAlgorithm: Algorithm {
    /// Whether a private key is bound.
    fn can_sign(&self) -> bool;

    /// Sign `data` with the bound private key.
    ///
    /// # Errors
    /// `CannotSign` on a verify-only instance.
    fn sign_data(&self, data: &[u8]) -> AlgorithmResult<Vec<u8>>;
}

/// Implementation of Algorithm for Arc<T> to allow shared ownership.
impl<T: Algorithm + ?Sized> Algorithm for Arc<T> {
    fn name(&self) -> AlgorithmName {
        (**self).name()
    }

    fn is_asymmetric(&self) -> bool {
        (**self).is_asymmetric()
    }

    fn sign(&self, secret: Option<&[u8]>, data: &[u8]) -> AlgorithmResult<Vec<u8>> {
        (**self).sign(secret, data)
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> AlgorithmResult<bool> {
        (**self).verify(data, signature)
    }
}

impl<T: Algorithm + ?Sized> Algorithm for Box<T> {
    fn name(&self) -> AlgorithmName {
        (**self).name()
    }

    fn is_asymmetric(&self) -> bool {
        (**self).is_asymmetric()
    }

    fn sign(&self, secret: Option<&[u8]>, data: &[u8]) -> AlgorithmResult<Vec<u8>> {
        (**self).sign(secret, data)
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> AlgorithmResult<bool> {
        (**self).verify(data, signature)
    }
}

impl<T: AsymmetricAlgorithm + ?Sized> AsymmetricAlgorithm for Arc<T> {
    fn can_sign(&self) -> bool {
        (**self).can_sign()
    }

    fn sign_data(&self, data: &[u8]) -> AlgorithmResult<Vec<u8>> {
        (**self).sign_data(data)
    }
}

impl<T: AsymmetricAlgorithm + ?Sized> AsymmetricAlgorithm for Box<T> {
    fn can_sign(&self) -> bool {
        (**self).can_sign()
    }

    fn sign_data(&self, data: &[u8]) -> AlgorithmResult<Vec<u8>> {
        (**self).sign_data(data)
    }
}
