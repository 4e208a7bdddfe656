#![no_main]

use std::sync::OnceLock;

use arbitrary::Arbitrary;
use birdolcrypt::{CryptoProvider, KeyVariant};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct VerifyInput {
    message: String,
    signature: Vec<u8>,
}

fn providers() -> &'static [CryptoProvider; 2] {
    static PROVIDERS: OnceLock<[CryptoProvider; 2]> = OnceLock::new();
    PROVIDERS.get_or_init(|| {
        [
            CryptoProvider::generate(KeyVariant::Rsa1024).unwrap(),
            CryptoProvider::generate(KeyVariant::Ecdsa).unwrap(),
        ]
    })
}

fuzz_target!(|input: VerifyInput| {
    for provider in providers() {
        // Arbitrary bytes must never panic and almost never verify
        let _ = provider.verify_bytes(&input.message, &input.signature);
    }
});
