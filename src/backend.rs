/*!
 * Capability interface shared by the algorithm families
 *
 * Every key family (RSA, ECDSA) implements `KeyBackend` once. The provider
 * dispatches sign, verify and export through it without knowing which family
 * it holds.
 */

use crate::error::CryptoResult;

/// Whether a loaded key carries its private half
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    /// Only the public key is available; signing is impossible
    PublicOnly,
    /// Both halves are available
    PublicAndPrivate,
}

/// Sign, verify and export operations for one algorithm family
pub trait KeyBackend {
    /// Algorithm family name used in errors and logs
    fn algorithm(&self) -> &'static str;

    fn key_state(&self) -> KeyState;

    /// Sign `message`, returning the raw signature bytes
    ///
    /// Fails with a key-state error when only the public key is held.
    fn sign(&self, message: &[u8]) -> CryptoResult<Vec<u8>>;

    /// Verify a raw signature over `message`
    ///
    /// Returns `Ok(false)` for a well-formed but invalid signature, and a
    /// decode error when the signature bytes are not a valid encoding.
    fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<bool>;

    /// Exportable text form of the private key, `None` when absent
    fn export_private(&self) -> CryptoResult<Option<String>>;

    /// Exportable text form of the public key
    fn export_public(&self) -> CryptoResult<String>;

    /// Bytes written to a `.priv` file, `None` when no private key is held
    fn private_file_bytes(&self) -> CryptoResult<Option<Vec<u8>>>;

    /// Bytes written to a `.pub` file
    fn public_file_bytes(&self) -> CryptoResult<Vec<u8>>;
}
