/*!
 * Error Handling for the BirdolCrypt key and signature module
 *
 * Provides one error type for every provider operation, with numeric error codes,
 * user-friendly messages, and suggested remediation strategies.
 */

use std::collections::HashMap;
use thiserror::Error;

/// Error type for all key management and signature operations
///
/// A cryptographically invalid signature is not an error: verification reports
/// it as `Ok(false)`. Errors are reserved for structural problems (bad input
/// encodings), key-state misuse and library failures.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid {parameter} '{value}'. Available {parameter}: {expected}")]
    Configuration {
        parameter: String,
        value: String,
        expected: String,
        error_code: u32,
    },

    #[error("Failed to decode {format}: {cause}")]
    Decode {
        format: String,
        cause: String,
        error_code: u32,
    },

    #[error("No private key loaded for {operation}")]
    SigningKeyAbsent { operation: String, error_code: u32 },

    #[error("Operation {operation} is not supported for key type {variant}")]
    UnsupportedVariant {
        operation: String,
        variant: String,
        error_code: u32,
    },

    #[error("RSA key size mismatch: expected {expected} bits, got {actual} bits")]
    KeySizeMismatch {
        expected: usize,
        actual: usize,
        error_code: u32,
    },

    #[error("{algorithm} key generation failed: {cause}")]
    KeyGeneration {
        algorithm: String,
        cause: String,
        error_code: u32,
    },

    #[error("{algorithm} signing failed: {cause}")]
    Signing {
        algorithm: String,
        cause: String,
        error_code: u32,
    },

    #[error("Failed to encode {format}: {cause}")]
    Encoding {
        format: String,
        cause: String,
        error_code: u32,
    },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Error code constants for different error categories
pub mod error_codes {
    // Configuration errors: 1000-1999
    pub const UNKNOWN_KEY_TYPE: u32 = 1001;

    // Decode errors: 2000-2999
    pub const INVALID_HEX: u32 = 2001;
    pub const INVALID_BASE64: u32 = 2002;
    pub const INVALID_UTF8: u32 = 2003;
    pub const INVALID_XML_DOCUMENT: u32 = 2004;
    pub const INVALID_DER_KEY: u32 = 2005;
    pub const INVALID_DER_SIGNATURE: u32 = 2006;
    pub const INVALID_RSA_COMPONENTS: u32 = 2007;

    // Key state errors: 3000-3999
    pub const SIGNING_KEY_ABSENT: u32 = 3001;
    pub const UNSUPPORTED_VARIANT: u32 = 3003;
    pub const KEY_SIZE_MISMATCH: u32 = 3004;

    // Library failures: 4000-4999
    pub const KEY_GENERATION_FAILED: u32 = 4001;
    pub const SIGNING_FAILED: u32 = 4002;
    pub const ENCODING_FAILED: u32 = 4003;

    // IO errors: 5000-5999
    pub const IO_FAILED: u32 = 5001;
}

impl CryptoError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            CryptoError::Configuration { error_code, .. } => *error_code,
            CryptoError::Decode { error_code, .. } => *error_code,
            CryptoError::SigningKeyAbsent { error_code, .. } => *error_code,
            CryptoError::UnsupportedVariant { error_code, .. } => *error_code,
            CryptoError::KeySizeMismatch { error_code, .. } => *error_code,
            CryptoError::KeyGeneration { error_code, .. } => *error_code,
            CryptoError::Signing { error_code, .. } => *error_code,
            CryptoError::Encoding { error_code, .. } => *error_code,
            CryptoError::IoError(_) => error_codes::IO_FAILED,
        }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            CryptoError::Configuration { .. } => "Configuration",
            CryptoError::Decode { .. } => "Decode",
            CryptoError::SigningKeyAbsent { .. } => "SigningKeyAbsent",
            CryptoError::UnsupportedVariant { .. } => "UnsupportedVariant",
            CryptoError::KeySizeMismatch { .. } => "KeySizeMismatch",
            CryptoError::KeyGeneration { .. } => "KeyGeneration",
            CryptoError::Signing { .. } => "Signing",
            CryptoError::Encoding { .. } => "Encoding",
            CryptoError::IoError(_) => "IoError",
        }
    }

    /// True for malformed hex, base64, XML or DER input
    pub fn is_decode_error(&self) -> bool {
        matches!(self, CryptoError::Decode { .. })
    }

    /// True when the loaded key material cannot serve the requested operation
    pub fn is_key_state_error(&self) -> bool {
        matches!(
            self,
            CryptoError::SigningKeyAbsent { .. } | CryptoError::UnsupportedVariant { .. }
        )
    }

    /// True for caller misuse at the command line boundary
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CryptoError::Configuration { .. })
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            CryptoError::Configuration {
                parameter,
                value,
                expected,
                ..
            } => format!(
                "'{}' is not a valid {}. Choose one of: {}.",
                value, parameter, expected
            ),
            CryptoError::Decode { format, .. } => format!(
                "The supplied {} could not be read. The input may be corrupted or in the wrong format.",
                format
            ),
            CryptoError::SigningKeyAbsent { operation, .. } => format!(
                "Operation '{}' needs a private key, but only a public key is loaded.",
                operation
            ),
            CryptoError::UnsupportedVariant {
                operation, variant, ..
            } => format!("Key type '{}' cannot be used for '{}'.", variant, operation),
            CryptoError::KeySizeMismatch {
                expected, actual, ..
            } => format!(
                "The key is {} bits long but a {}-bit key type was requested.",
                actual, expected
            ),
            CryptoError::KeyGeneration { algorithm, .. } => {
                format!("Could not generate a new {} key.", algorithm)
            }
            CryptoError::Signing { algorithm, .. } => {
                format!("Could not produce a {} signature.", algorithm)
            }
            CryptoError::Encoding { format, .. } => {
                format!("Could not serialize the key as {}.", format)
            }
            CryptoError::IoError(_) => {
                "Input/output operation failed. Check file paths and permissions.".to_string()
            }
        }
    }

    /// Get technical details for debugging
    pub fn technical_details(&self) -> HashMap<String, String> {
        let mut details = HashMap::new();

        details.insert("error_code".to_string(), self.error_code().to_string());
        details.insert("error_type".to_string(), self.error_type().to_string());

        match self {
            CryptoError::Configuration {
                parameter, value, ..
            } => {
                details.insert("parameter".to_string(), parameter.clone());
                details.insert("value".to_string(), value.clone());
            }
            CryptoError::Decode { format, cause, .. }
            | CryptoError::Encoding { format, cause, .. } => {
                details.insert("format".to_string(), format.clone());
                details.insert("cause".to_string(), cause.clone());
            }
            CryptoError::KeyGeneration {
                algorithm, cause, ..
            }
            | CryptoError::Signing {
                algorithm, cause, ..
            } => {
                details.insert("algorithm".to_string(), algorithm.clone());
                details.insert("cause".to_string(), cause.clone());
            }
            CryptoError::SigningKeyAbsent { operation, .. } => {
                details.insert("operation".to_string(), operation.clone());
            }
            CryptoError::UnsupportedVariant {
                operation, variant, ..
            } => {
                details.insert("operation".to_string(), operation.clone());
                details.insert("variant".to_string(), variant.clone());
            }
            _ => {
                details.insert("details".to_string(), format!("{:?}", self));
            }
        }

        details
    }

    /// Get suggested remediation steps
    pub fn suggested_remediation(&self) -> Option<String> {
        match self {
            CryptoError::Configuration { expected, .. } => {
                Some(format!("Use one of the supported values: {}.", expected))
            }
            CryptoError::Decode { error_code, .. } => match *error_code {
                error_codes::INVALID_HEX => Some(
                    "Signatures must be an even number of hexadecimal digits.".to_string(),
                ),
                error_codes::INVALID_BASE64
                | error_codes::INVALID_UTF8
                | error_codes::INVALID_XML_DOCUMENT => Some(
                    "RSA key files must contain the base64 text written by keygen or makepub."
                        .to_string(),
                ),
                error_codes::INVALID_DER_KEY => Some(
                    "ECDSA key files must contain the raw DER bytes written by keygen or makepub."
                        .to_string(),
                ),
                _ => None,
            },
            CryptoError::SigningKeyAbsent { .. } => {
                Some("Load the private key file (.priv) instead of the public one.".to_string())
            }
            CryptoError::KeySizeMismatch { .. } => {
                Some("Pass the keytype the key was generated with.".to_string())
            }
            CryptoError::KeyGeneration { .. } => Some(
                "Ensure sufficient entropy is available. Check system random number generator."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

/// Convenience constructors for common error types
impl CryptoError {
    pub fn configuration_error(parameter: &str, value: &str, expected: &str, error_code: u32) -> Self {
        CryptoError::Configuration {
            parameter: parameter.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
            error_code,
        }
    }

    pub fn decode_error(format: &str, cause: &str, error_code: u32) -> Self {
        CryptoError::Decode {
            format: format.to_string(),
            cause: cause.to_string(),
            error_code,
        }
    }

    pub fn signing_key_absent(operation: &str) -> Self {
        CryptoError::SigningKeyAbsent {
            operation: operation.to_string(),
            error_code: error_codes::SIGNING_KEY_ABSENT,
        }
    }

    pub fn unsupported_variant(operation: &str, variant: &str) -> Self {
        CryptoError::UnsupportedVariant {
            operation: operation.to_string(),
            variant: variant.to_string(),
            error_code: error_codes::UNSUPPORTED_VARIANT,
        }
    }

    pub fn key_size_mismatch(expected: usize, actual: usize) -> Self {
        CryptoError::KeySizeMismatch {
            expected,
            actual,
            error_code: error_codes::KEY_SIZE_MISMATCH,
        }
    }

    pub fn key_generation_error(algorithm: &str, cause: &str) -> Self {
        CryptoError::KeyGeneration {
            algorithm: algorithm.to_string(),
            cause: cause.to_string(),
            error_code: error_codes::KEY_GENERATION_FAILED,
        }
    }

    pub fn signing_error(algorithm: &str, cause: &str) -> Self {
        CryptoError::Signing {
            algorithm: algorithm.to_string(),
            cause: cause.to_string(),
            error_code: error_codes::SIGNING_FAILED,
        }
    }

    pub fn encoding_error(format: &str, cause: &str) -> Self {
        CryptoError::Encoding {
            format: format.to_string(),
            cause: cause.to_string(),
            error_code: error_codes::ENCODING_FAILED,
        }
    }

    pub fn io_error(cause: &str) -> Self {
        CryptoError::IoError(cause.to_string())
    }
}

// From implementations for automatic error conversion
impl From<std::io::Error> for CryptoError {
    fn from(err: std::io::Error) -> Self {
        CryptoError::io_error(&err.to_string())
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        CryptoError::decode_error("hex string", &err.to_string(), error_codes::INVALID_HEX)
    }
}

impl From<base64::DecodeError> for CryptoError {
    fn from(err: base64::DecodeError) -> Self {
        CryptoError::decode_error("base64 text", &err.to_string(), error_codes::INVALID_BASE64)
    }
}

impl From<std::string::FromUtf8Error> for CryptoError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CryptoError::decode_error("UTF-8 text", &err.to_string(), error_codes::INVALID_UTF8)
    }
}

/// Result type alias for key and signature operations
pub type CryptoResult<T> = Result<T, CryptoError>;
