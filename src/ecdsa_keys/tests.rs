use super::*;
use crate::backend::{KeyBackend, KeyState};
use crate::error::error_codes;
use crate::utils::{from_hex, to_hex};

#[test]
fn test_ecdsa_sign_verify() {
    let key = EcdsaKeyMaterial::generate();
    assert_eq!(key.key_state(), KeyState::PublicAndPrivate);

    let signature = key.sign(b"hello").unwrap();
    // DER SEQUENCE of two INTEGERs
    assert_eq!(signature[0], 0x30);
    assert!(signature.len() <= 72);

    assert!(key.verify(b"hello", &signature).unwrap());
    assert!(!key.verify(b"hellx", &signature).unwrap());
}

#[test]
fn test_ecdsa_signatures_are_deterministic() {
    let key = EcdsaKeyMaterial::generate();
    assert_eq!(key.sign(b"rfc6979").unwrap(), key.sign(b"rfc6979").unwrap());
}

#[test]
fn test_ecdsa_tampered_signature_is_invalid() {
    let key = EcdsaKeyMaterial::generate();
    let mut signature = key.sign(b"tamper").unwrap();

    // Flipping a bit of the last S byte keeps the DER structure intact
    let last = signature.len() - 1;
    signature[last] ^= 0x01;
    assert!(!key.verify(b"tamper", &signature).unwrap());
}

#[test]
fn test_ecdsa_malformed_signature_is_decode_error() {
    let key = EcdsaKeyMaterial::generate();

    for bad in [&[0xab][..], &[0x30, 0x02, 0x02, 0x00][..], &[0u8; 64][..]] {
        let err = key.verify(b"hello", bad).unwrap_err();
        assert!(err.is_decode_error());
        assert_eq!(err.error_code(), error_codes::INVALID_DER_SIGNATURE);
    }
}

#[test]
fn test_ecdsa_public_only_cannot_sign() {
    let full = EcdsaKeyMaterial::generate();
    let public = EcdsaKeyMaterial::from_public_der(&full.public_der().unwrap()).unwrap();

    assert_eq!(public.key_state(), KeyState::PublicOnly);
    assert!(public.export_private().unwrap().is_none());

    let err = public.sign(b"hello").unwrap_err();
    assert!(err.is_key_state_error());

    let signature = full.sign(b"hello").unwrap();
    assert!(public.verify(b"hello", &signature).unwrap());
    assert_eq!(
        public.verify(b"other", &signature).unwrap(),
        full.verify(b"other", &signature).unwrap()
    );
}

#[test]
fn test_ecdsa_hex_export_import_keeps_public_point() {
    let original = EcdsaKeyMaterial::generate();
    let private_hex = original.export_private().unwrap().unwrap();
    assert_eq!(private_hex, private_hex.to_lowercase());

    let restored = EcdsaKeyMaterial::from_private_der(&from_hex(&private_hex).unwrap()).unwrap();
    assert_eq!(restored.public_point(), original.public_point());
    assert_eq!(restored.export_public().unwrap(), original.export_public().unwrap());
    assert_eq!(restored.export_private().unwrap().unwrap(), private_hex);
}

#[test]
fn test_ecdsa_public_der_shape() {
    let key = EcdsaKeyMaterial::generate();
    let der = key.public_der().unwrap();

    // SPKI for an uncompressed secp256k1 point is always 88 bytes
    assert_eq!(der.len(), 88);
    assert_eq!(&der[der.len() - 65..], &key.public_point()[..]);
    assert_eq!(key.public_file_bytes().unwrap(), der);
    assert_eq!(key.export_public().unwrap(), to_hex(&der));
}

#[test]
fn test_ecdsa_private_der_carries_curve_oid() {
    let key = EcdsaKeyMaterial::generate();
    let der = key.private_der().unwrap().unwrap();

    // version, scalar, [0] namedCurve secp256k1, [1] uncompressed point
    assert_eq!(der.len(), 118);
    assert_eq!(&der[..2], &[0x30, 0x74]);
    let curve_oid = [0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x0a];
    assert!(der.windows(curve_oid.len()).any(|w| w == curve_oid));
    assert_eq!(&der[der.len() - 65..], &key.public_point()[..]);

    let restored = EcdsaKeyMaterial::from_private_der(&der).unwrap();
    assert_eq!(restored.public_point(), key.public_point());
    assert_eq!(restored.private_der().unwrap().unwrap(), der);
}

#[test]
fn test_ecdsa_pkcs8_private_key_accepted() {
    use k256::pkcs8::EncodePrivateKey;

    let original = EcdsaKeyMaterial::generate();
    let secret_key = match &original {
        EcdsaKeyMaterial::Full { secret_key, .. } => secret_key.clone(),
        EcdsaKeyMaterial::Public(_) => unreachable!(),
    };
    let pkcs8 = secret_key.to_pkcs8_der().unwrap();

    let restored = EcdsaKeyMaterial::from_private_der(pkcs8.as_bytes()).unwrap();
    assert_eq!(restored.public_point(), original.public_point());
}

#[test]
fn test_ecdsa_invalid_key_der_rejected() {
    let err = EcdsaKeyMaterial::from_private_der(&[0x30, 0x00]).unwrap_err();
    assert_eq!(err.error_code(), error_codes::INVALID_DER_KEY);

    let err = EcdsaKeyMaterial::from_public_der(b"not a key").unwrap_err();
    assert_eq!(err.error_code(), error_codes::INVALID_DER_KEY);

    // A private key is not a public key
    let key = EcdsaKeyMaterial::generate();
    let private_der = key.private_der().unwrap().unwrap();
    assert!(EcdsaKeyMaterial::from_public_der(&private_der).is_err());
}
