//! Digest binding for the RSASSA-PKCS1-v1_5 family

use crate::name::AlgorithmName;
use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha384, Sha512};

mod sealed {
    pub trait Sealed {}
}

/// Digest usable with RSASSA-PKCS1-v1_5, tied to the header name it signs under.
///
/// Sealed: the set of RS* algorithms is fixed by the JWA registry.
pub trait Pkcs1Digest: Digest + Clone + Send + Sync + 'static + sealed::Sealed {
    /// Header `alg` value for this digest
    const ALGORITHM: AlgorithmName;

    /// Wrap a private key for PKCS#1 v1.5 signing with this digest
    #[doc(hidden)]
    fn signing_key(key: RsaPrivateKey) -> SigningKey<Self>;

    /// Wrap a public key for PKCS#1 v1.5 verification with this digest
    #[doc(hidden)]
    fn verifying_key(key: RsaPublicKey) -> VerifyingKey<Self>;
}

macro_rules! pkcs1_digest {
    ($digest:ty, $name:expr) => {
        impl sealed::Sealed for $digest {}

        impl Pkcs1Digest for $digest {
            const ALGORITHM: AlgorithmName = $name;

            #[inline]
            fn signing_key(key: RsaPrivateKey) -> SigningKey<Self> {
                SigningKey::<$digest>::new(key)
            }

            #[inline]
            fn verifying_key(key: RsaPublicKey) -> VerifyingKey<Self> {
                VerifyingKey::<$digest>::new(key)
            }
        }
    };
}

pkcs1_digest!(Sha256, AlgorithmName::RS256);
pkcs1_digest!(Sha384, AlgorithmName::RS384);
pkcs1_digest!(Sha512, AlgorithmName::RS512);
