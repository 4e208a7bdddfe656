use crate::error::{error_codes, CryptoError, CryptoResult};

/// Convert bytes to a lowercase hexadecimal string with no separators
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Convert a hexadecimal string to bytes
///
/// The input must be non-empty, have an even number of characters and contain
/// only hexadecimal digits (either case). Pairs are converted left to right.
/// On any violation the whole input is rejected; no partial output is returned.
pub fn from_hex(text: &str) -> CryptoResult<Vec<u8>> {
    if text.is_empty() {
        return Err(CryptoError::decode_error(
            "hex string",
            "input is empty",
            error_codes::INVALID_HEX,
        ));
    }

    Ok(hex::decode(text)?)
}
