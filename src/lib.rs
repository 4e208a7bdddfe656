/*!
 * BirdolCrypt key management and signature module
 *
 * This crate generates, imports, exports and uses asymmetric signing keys from
 * two algorithm families behind one provider:
 *
 * - RSA (1024, 2048 and 4096 bit moduli), PKCS#1 v1.5 signatures over SHA-512,
 *   keys exchanged as base64 `RSAKeyValue` XML documents
 * - ECDSA over secp256k1, SHA-256 with RFC 6979 nonces, keys exchanged as DER
 *
 * The `birdolcrypt` binary exposes the provider as a small command line tool.
 */

/// Supported key variants and their schemes
pub mod variant;

/// Capability interface implemented by each algorithm family
pub mod backend;

/// RSA key material and the `RSAKeyValue` document codec
pub mod rsa_keys;

/// secp256k1 key material and DER codecs
pub mod ecdsa_keys;

/// The multi-algorithm key and signature provider
pub mod provider;

/// Key file import and export
pub mod key_management;

/// Command line interface
pub mod cli;

/// Console logging setup for the binary
pub mod logging;

/// Common error types for the cryptography module
pub mod error;

/// Hex encoding utilities
pub mod utils;

// Re-export main types for convenience
pub use backend::{KeyBackend, KeyState};
pub use ecdsa_keys::EcdsaKeyMaterial;
pub use error::{CryptoError, CryptoResult};
pub use provider::{CryptoProvider, KeyMaterial, KeyRole};
pub use rsa_keys::RsaKeyMaterial;
pub use variant::{KeyCodec, KeyVariant, SignatureScheme};

/// The most commonly used types and functions
pub mod prelude {
    pub use crate::key_management::public_key_path_for;
    pub use crate::utils::{from_hex, to_hex};
    pub use crate::CryptoError;
    pub use crate::CryptoProvider;
    pub use crate::CryptoResult;
    pub use crate::KeyRole;
    pub use crate::KeyVariant;
}
