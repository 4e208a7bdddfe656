/*!
 * RSA key pairs exchanged as `RSAKeyValue` documents
 *
 * Signatures are RSASSA-PKCS1-v1_5 over a SHA-512 digest of the message.
 * Keys travel as base64 text of the XML document written by .NET's
 * `RSA.ToXmlString`, so files produced by existing tooling load unchanged.
 */

mod keypair;
pub mod xml;

pub use keypair::RsaKeyMaterial;
pub use xml::{RsaKeyValue, RsaPrivateParams};
