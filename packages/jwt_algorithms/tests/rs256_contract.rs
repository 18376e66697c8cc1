//! RS256 capability contract: construction forms, sign/verify and error kinds

mod common;

use common::{OTHER_PRIVATE_KEY, PRIVATE_KEY, public_key, signing_input};
use jwt_algorithms::keys::KeyBundle;
use jwt_algorithms::{
    Algorithm, AlgorithmError, AlgorithmName, AsymmetricAlgorithm, ErrorKind, KeyRole,
    Rs256Algorithm, RsaPublicKey,
};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};

#[test]
fn test_end_to_end_sign_with_pair_verify_with_public() {
    let a = Rs256Algorithm::new(public_key(), PRIVATE_KEY.clone()).unwrap();
    let b = Rs256Algorithm::verify_only(public_key());
    let data = signing_input("eyJzdWIiOiJhbGljZSJ9");

    let signature = a.sign_data(&data).unwrap();
    assert!(b.verify(&data, &signature).unwrap());

    let err = b.sign_data(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CannotSign);
    assert!(matches!(err, AlgorithmError::CannotSign { algorithm: AlgorithmName::RS256 }));
}

#[test]
fn test_name_and_asymmetry_for_every_construction_form() {
    let pem = PRIVATE_KEY.to_pkcs8_pem(LineEnding::LF).unwrap();
    let bundle = KeyBundle::from_private_key_pem(&pem).unwrap();

    let instances = [
        Rs256Algorithm::new(public_key(), PRIVATE_KEY.clone()).unwrap(),
        Rs256Algorithm::verify_only(public_key()),
        Rs256Algorithm::from_parts(Some(public_key()), None).unwrap(),
        Rs256Algorithm::from_key_source(&bundle).unwrap(),
    ];

    for instance in &instances {
        assert_eq!(instance.name().as_str(), "RS256");
        assert_eq!(instance.name().to_string(), "RS256");
        assert!(instance.is_asymmetric());
    }
}

#[test]
fn test_null_public_key_is_a_construction_error() {
    for private in [None, Some(PRIVATE_KEY.clone())] {
        let err = Rs256Algorithm::from_parts(None, private).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
        assert!(matches!(err, AlgorithmError::MissingKey { role: KeyRole::Public, .. }));
    }
}

#[test]
fn test_certificate_bundle_forms() {
    // private key present: full capability
    let pem = PRIVATE_KEY.to_pkcs8_pem(LineEnding::LF).unwrap();
    let bundle = KeyBundle::from_private_key_pem(&pem).unwrap();
    let signer = Rs256Algorithm::from_key_source(&bundle).unwrap();
    assert!(signer.can_sign());

    // public key only: verify-only
    let public_pem = public_key().to_public_key_pem(LineEnding::LF).unwrap();
    let bundle = KeyBundle::from_public_key_pem(&public_pem).unwrap();
    let verifier = Rs256Algorithm::from_key_source(&bundle).unwrap();
    assert!(!verifier.can_sign());

    let data = signing_input("eyJzdWIiOiJib2IifQ");
    let signature = signer.sign_data(&data).unwrap();
    assert!(verifier.verify(&data, &signature).unwrap());

    // no RSA public key: fails at construction, not at sign/verify time
    let err = Rs256Algorithm::from_key_source(&KeyBundle::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentNull);
}

#[test]
fn test_generic_sign_ignores_secret() {
    let alg = Rs256Algorithm::new(public_key(), PRIVATE_KEY.clone()).unwrap();
    let data = signing_input("e30");

    let plain = alg.sign_data(&data).unwrap();
    assert_eq!(alg.sign(None, &data).unwrap(), plain);
    assert_eq!(alg.sign(Some(b"ignored"), &data).unwrap(), plain);
}

#[test]
fn test_single_byte_tamper_fails() {
    let alg = Rs256Algorithm::new(public_key(), PRIVATE_KEY.clone()).unwrap();
    let data = signing_input("eyJzdWIiOiJjYXJvbCJ9");
    let signature = alg.sign_data(&data).unwrap();

    for index in [0, 1, signature.len() / 2, signature.len() - 1] {
        let mut tampered = signature.clone();
        tampered[index] = tampered[index].wrapping_add(1);
        assert!(!alg.verify(&data, &tampered).unwrap(), "byte {index}");
    }
}

#[test]
fn test_other_key_does_not_verify() {
    let signer = Rs256Algorithm::new(
        RsaPublicKey::from(&*OTHER_PRIVATE_KEY),
        OTHER_PRIVATE_KEY.clone(),
    )
    .unwrap();
    let verifier = Rs256Algorithm::verify_only(public_key());
    let data = signing_input("e30");

    let signature = signer.sign_data(&data).unwrap();
    assert!(!verifier.verify(&data, &signature).unwrap());
}

#[test]
fn test_dyn_dispatch_hides_the_variant() {
    let algorithms: Vec<Box<dyn Algorithm>> = vec![
        Box::new(Rs256Algorithm::new(public_key(), PRIVATE_KEY.clone()).unwrap()),
        Box::new(Rs256Algorithm::verify_only(public_key())),
    ];
    let data = signing_input("e30");
    let signature = algorithms[0].sign(None, &data).unwrap();

    for algorithm in &algorithms {
        assert_eq!(algorithm.name(), AlgorithmName::RS256);
        assert!(algorithm.verify(&data, &signature).unwrap());
    }
    assert_eq!(
        algorithms[1].sign(None, &data).unwrap_err().kind(),
        ErrorKind::CannotSign
    );
}
