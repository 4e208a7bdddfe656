/*!
 * ECDSA over secp256k1
 *
 * Private keys travel as SEC1 `ECPrivateKey` DER, public keys as
 * SubjectPublicKeyInfo DER with an uncompressed point. Signatures use SHA-256
 * with RFC 6979 nonces and are DER encoded.
 */

mod keypair;

pub use keypair::EcdsaKeyMaterial;

#[cfg(test)]
mod tests;
