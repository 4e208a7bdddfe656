#![no_main]

use arbitrary::Arbitrary;
use birdolcrypt::{CryptoProvider, KeyVariant};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Family {
    Rsa,
    Ecdsa,
}

#[derive(Arbitrary, Debug)]
struct KeyImportInput {
    family: Family,
    private: bool,
    bytes: Vec<u8>,
}

fuzz_target!(|input: KeyImportInput| {
    let variant = match input.family {
        Family::Rsa => KeyVariant::Rsa1024,
        Family::Ecdsa => KeyVariant::Ecdsa,
    };

    let imported = if input.private {
        CryptoProvider::import_private(variant, &input.bytes)
    } else {
        CryptoProvider::import_public(variant, &input.bytes)
    };

    // Anything that imports must re-export and import again to the same public key
    if let Ok(provider) = imported {
        let public = provider.public_file_bytes().unwrap();
        let again = CryptoProvider::import_public(variant, &public).unwrap();
        assert_eq!(again.public_key(), provider.public_key());
    }
});
