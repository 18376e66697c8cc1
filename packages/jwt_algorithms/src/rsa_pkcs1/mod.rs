//! RSASSA-PKCS1-v1_5 algorithms (RS256, RS384, RS512)

mod algorithm;
mod hash;

pub use algorithm::{Rs256Algorithm, Rs384Algorithm, Rs512Algorithm, RsaPkcs1Algorithm};
pub use hash::Pkcs1Digest;
