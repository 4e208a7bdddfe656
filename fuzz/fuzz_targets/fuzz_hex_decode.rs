#![no_main]

use birdolcrypt::utils::{from_hex, to_hex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    match from_hex(text) {
        Ok(bytes) => {
            assert_eq!(bytes.len() * 2, text.len());
            assert_eq!(to_hex(&bytes), text.to_lowercase());
        }
        Err(err) => assert!(err.is_decode_error()),
    }
});
