/*!
 * Supported key variants
 *
 * The closed set of algorithm/size combinations the provider understands, and the
 * rules mapping each one to its signature scheme, export codec and CLI name.
 */

use std::fmt;
use std::str::FromStr;

use crate::error::{error_codes, CryptoError};

/// Key variants with their native algorithm and serialization format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyVariant {
    /// RSA with a 1024-bit modulus
    Rsa1024,
    /// RSA with a 2048-bit modulus
    Rsa2048,
    /// RSA with a 4096-bit modulus
    Rsa4096,
    /// ECDSA over secp256k1
    Ecdsa,
    /// No algorithm; the instance only carries an identity
    None,
}

/// Signature scheme used by a variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureScheme {
    /// RSASSA-PKCS1-v1_5 over a SHA-512 digest
    RsaPkcs1v15Sha512,
    /// ECDSA over secp256k1 with SHA-256 and RFC 6979 nonces, DER encoded
    EcdsaSecp256k1,
}

/// Serialization codec for exported keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCodec {
    /// Base64 of an `RSAKeyValue` XML document
    XmlBase64,
    /// DER bytes on disk, lowercase hex in memory
    DerHex,
}

/// Names accepted for the keytype argument, in display order
pub const KEY_TYPE_NAMES: &str = "rsa-1024, rsa-2048, rsa-4096, ecdsa";

impl KeyVariant {
    /// Every variant that can sign and verify
    pub const SIGNING_VARIANTS: [KeyVariant; 4] = [
        KeyVariant::Rsa1024,
        KeyVariant::Rsa2048,
        KeyVariant::Rsa4096,
        KeyVariant::Ecdsa,
    ];

    /// Every variant, including `None`
    pub fn all() -> [KeyVariant; 5] {
        [
            KeyVariant::Rsa1024,
            KeyVariant::Rsa2048,
            KeyVariant::Rsa4096,
            KeyVariant::Ecdsa,
            KeyVariant::None,
        ]
    }

    /// Variants accepted as a keytype on the command line
    pub fn cli_variants() -> &'static [KeyVariant] {
        &Self::SIGNING_VARIANTS
    }

    /// The name used at the command line boundary
    pub fn name(&self) -> &'static str {
        match self {
            KeyVariant::Rsa1024 => "rsa-1024",
            KeyVariant::Rsa2048 => "rsa-2048",
            KeyVariant::Rsa4096 => "rsa-4096",
            KeyVariant::Ecdsa => "ecdsa",
            KeyVariant::None => "None",
        }
    }

    /// RSA modulus length in bits, `None` for non-RSA variants
    pub fn rsa_bits(&self) -> Option<usize> {
        match self {
            KeyVariant::Rsa1024 => Some(1024),
            KeyVariant::Rsa2048 => Some(2048),
            KeyVariant::Rsa4096 => Some(4096),
            KeyVariant::Ecdsa | KeyVariant::None => None,
        }
    }

    pub fn is_rsa(&self) -> bool {
        self.rsa_bits().is_some()
    }

    pub fn is_ecdsa(&self) -> bool {
        matches!(self, KeyVariant::Ecdsa)
    }

    /// Whether sign and verify are meaningful for this variant
    pub fn supports_signing(&self) -> bool {
        self.signature_scheme().is_some()
    }

    pub fn signature_scheme(&self) -> Option<SignatureScheme> {
        match self {
            KeyVariant::Rsa1024 | KeyVariant::Rsa2048 | KeyVariant::Rsa4096 => {
                Some(SignatureScheme::RsaPkcs1v15Sha512)
            }
            KeyVariant::Ecdsa => Some(SignatureScheme::EcdsaSecp256k1),
            KeyVariant::None => None,
        }
    }

    pub fn key_codec(&self) -> Option<KeyCodec> {
        match self {
            KeyVariant::Rsa1024 | KeyVariant::Rsa2048 | KeyVariant::Rsa4096 => {
                Some(KeyCodec::XmlBase64)
            }
            KeyVariant::Ecdsa => Some(KeyCodec::DerHex),
            KeyVariant::None => None,
        }
    }
}

impl fmt::Display for KeyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyVariant {
    type Err = CryptoError;

    /// Parse a CLI keytype. `None` is never accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyVariant::cli_variants()
            .iter()
            .copied()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| {
                CryptoError::configuration_error(
                    "keytype",
                    s,
                    KEY_TYPE_NAMES,
                    error_codes::UNKNOWN_KEY_TYPE,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for variant in KeyVariant::SIGNING_VARIANTS {
            assert_eq!(variant.name().parse::<KeyVariant>().unwrap(), variant);
            assert_eq!(variant.to_string(), variant.name());
        }
    }

    #[test]
    fn test_unknown_keytype_is_configuration_error() {
        for bad in ["rsa-512", "RSA-2048", "ecdsa256", "None", ""] {
            let err = bad.parse::<KeyVariant>().unwrap_err();
            assert!(err.is_configuration_error(), "{bad} should be rejected");
            assert!(err.to_string().contains(KEY_TYPE_NAMES));
        }
    }

    #[test]
    fn test_scheme_and_codec_mapping() {
        assert_eq!(
            KeyVariant::Rsa4096.signature_scheme(),
            Some(SignatureScheme::RsaPkcs1v15Sha512)
        );
        assert_eq!(KeyVariant::Rsa1024.key_codec(), Some(KeyCodec::XmlBase64));
        assert_eq!(
            KeyVariant::Ecdsa.signature_scheme(),
            Some(SignatureScheme::EcdsaSecp256k1)
        );
        assert_eq!(KeyVariant::Ecdsa.key_codec(), Some(KeyCodec::DerHex));
        assert!(!KeyVariant::None.supports_signing());
        assert_eq!(KeyVariant::None.key_codec(), None);
    }

    #[test]
    fn test_all_lists_none_but_cli_does_not() {
        assert!(KeyVariant::all().contains(&KeyVariant::None));
        assert!(!KeyVariant::cli_variants().contains(&KeyVariant::None));
        assert_eq!(KeyVariant::None.to_string(), "None");
    }

    #[test]
    fn test_rsa_bits() {
        assert_eq!(KeyVariant::Rsa1024.rsa_bits(), Some(1024));
        assert_eq!(KeyVariant::Rsa2048.rsa_bits(), Some(2048));
        assert_eq!(KeyVariant::Rsa4096.rsa_bits(), Some(4096));
        assert!(KeyVariant::Ecdsa.rsa_bits().is_none());
        assert!(KeyVariant::Ecdsa.is_ecdsa());
        assert!(!KeyVariant::None.is_rsa());
    }
}
