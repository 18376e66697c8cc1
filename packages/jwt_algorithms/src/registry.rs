//! Algorithm selection by header `alg` name

use crate::config::AlgorithmConfig;
use crate::error::AlgorithmResult;
use crate::keys::KeySource;
use crate::name::AlgorithmName;
use crate::rsa_pkcs1::{Rs256Algorithm, Rs384Algorithm, Rs512Algorithm};
use crate::traits::Algorithm;
use tracing::debug;

/// Build the algorithm `name` over the keys held by `source`.
///
/// # Errors
/// Construction errors of the selected algorithm.
pub fn algorithm_for<S: KeySource + ?Sized>(
    name: AlgorithmName,
    source: &S,
    config: &AlgorithmConfig,
) -> AlgorithmResult<Box<dyn Algorithm>> {
    let algorithm: Box<dyn Algorithm> = match name {
        AlgorithmName::RS256 => Box::new(Rs256Algorithm::from_key_source_with_config(
            source,
            config.clone(),
        )?),
        AlgorithmName::RS384 => Box::new(Rs384Algorithm::from_key_source_with_config(
            source,
            config.clone(),
        )?),
        AlgorithmName::RS512 => Box::new(Rs512Algorithm::from_key_source_with_config(
            source,
            config.clone(),
        )?),
    };

    debug!(algorithm = %name, "Selected signing algorithm");
    Ok(algorithm)
}

/// [`algorithm_for`] keyed by the raw header string.
///
/// # Errors
/// `UnsupportedAlgorithm` for names outside [`AlgorithmName::ALL`], then as for
/// [`algorithm_for`].
pub fn algorithm_for_str<S: KeySource + ?Sized>(
    alg: &str,
    source: &S,
    config: &AlgorithmConfig,
) -> AlgorithmResult<Box<dyn Algorithm>> {
    algorithm_for(alg.parse()?, source, config)
}
