//! Keys shared by the integration tests

#![allow(dead_code)]

use jwt_algorithms::{RsaPrivateKey, RsaPublicKey};
use once_cell::sync::Lazy;

fn generate() -> RsaPrivateKey {
    RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("RSA key generation")
}

/// Primary 2048-bit key pair
pub static PRIVATE_KEY: Lazy<RsaPrivateKey> = Lazy::new(generate);

/// Unrelated 2048-bit key pair
pub static OTHER_PRIVATE_KEY: Lazy<RsaPrivateKey> = Lazy::new(generate);

/// Public half of [`PRIVATE_KEY`]
pub fn public_key() -> RsaPublicKey {
    RsaPublicKey::from(&*PRIVATE_KEY)
}

/// Signing input shaped like a real token
pub fn signing_input(payload: &str) -> Vec<u8> {
    format!("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.{payload}").into_bytes()
}
