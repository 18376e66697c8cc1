//! Shared 2048-bit keys for unit tests, generated once per test binary

use once_cell::sync::Lazy;
use rsa::RsaPrivateKey;

fn generate() -> RsaPrivateKey {
    RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("RSA key generation")
}

pub(crate) static KEY_A: Lazy<RsaPrivateKey> = Lazy::new(generate);
pub(crate) static KEY_B: Lazy<RsaPrivateKey> = Lazy::new(generate);
