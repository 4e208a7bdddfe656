use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha512};

use crate::backend::{KeyBackend, KeyState};
use crate::error::{error_codes, CryptoError, CryptoResult};
use crate::rsa_keys::xml::RsaKeyValue;

const ALGORITHM: &str = "RSA";

/// RSA key material, either a full key pair or a public key alone
///
/// The public-only state has no private half to sign with, so a signing attempt
/// from it always ends in `CryptoError::SigningKeyAbsent`.
#[derive(Debug, Clone)]
pub enum RsaKeyMaterial {
    /// Private key plus the public key derived from it
    Full {
        private_key: RsaPrivateKey,
        public_key: RsaPublicKey,
    },
    /// Public key imported on its own
    Public(RsaPublicKey),
}

impl RsaKeyMaterial {
    /// Generate a new key pair with a modulus of `bits` bits and e = 65537
    pub fn generate(bits: usize) -> CryptoResult<Self> {
        let private_key = RsaPrivateKey::new(&mut OsRng, bits).map_err(|e| {
            CryptoError::key_generation_error(ALGORITHM, &format!("Failed to generate RSA key: {}", e))
        })?;

        Ok(Self::from_private_key(private_key))
    }

    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        let public_key = RsaPublicKey::from(&private_key);
        RsaKeyMaterial::Full {
            private_key,
            public_key,
        }
    }

    /// Decode the base64 text of a full `RSAKeyValue` document
    pub fn from_private_text(text: &str) -> CryptoResult<Self> {
        let document = RsaKeyValue::parse(&decode_document_text(text)?)?;
        Ok(Self::from_private_key(document.to_private_key()?))
    }

    /// Decode the base64 text of an `RSAKeyValue` document, keeping only the public half
    pub fn from_public_text(text: &str) -> CryptoResult<Self> {
        let document = RsaKeyValue::parse(&decode_document_text(text)?)?;
        Ok(RsaKeyMaterial::Public(document.to_public_key()?))
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        match self {
            RsaKeyMaterial::Full { public_key, .. } => public_key,
            RsaKeyMaterial::Public(public_key) => public_key,
        }
    }

    pub fn private_key(&self) -> Option<&RsaPrivateKey> {
        match self {
            RsaKeyMaterial::Full { private_key, .. } => Some(private_key),
            RsaKeyMaterial::Public(_) => None,
        }
    }

    /// Modulus length in bits
    pub fn modulus_bits(&self) -> usize {
        self.public_key().n().bits()
    }

    /// Reject keys whose modulus does not match the requested size
    pub fn ensure_modulus_bits(&self, expected: usize) -> CryptoResult<()> {
        let actual = self.modulus_bits();
        if actual != expected {
            return Err(CryptoError::key_size_mismatch(expected, actual));
        }
        Ok(())
    }

    /// The full document text, base64 of the UTF-8 XML
    pub fn private_document(&self) -> CryptoResult<Option<String>> {
        match self.private_key() {
            Some(private_key) => {
                let xml = RsaKeyValue::from_private_key(private_key)?.to_xml();
                Ok(Some(base64::encode(xml.as_bytes())))
            }
            None => Ok(None),
        }
    }

    /// The public document text, base64 of the UTF-8 XML
    pub fn public_document(&self) -> String {
        let xml = RsaKeyValue::from_public_key(self.public_key()).to_xml();
        base64::encode(xml.as_bytes())
    }
}

/// Base64 text -> XML text. Whitespace such as a trailing newline is ignored.
fn decode_document_text(text: &str) -> CryptoResult<String> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(CryptoError::decode_error(
            "RSA key text",
            "input is empty",
            error_codes::INVALID_BASE64,
        ));
    }

    let bytes = base64::decode(&compact)?;
    Ok(String::from_utf8(bytes)?)
}

impl KeyBackend for RsaKeyMaterial {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn key_state(&self) -> KeyState {
        match self {
            RsaKeyMaterial::Full { .. } => KeyState::PublicAndPrivate,
            RsaKeyMaterial::Public(_) => KeyState::PublicOnly,
        }
    }

    fn sign(&self, message: &[u8]) -> CryptoResult<Vec<u8>> {
        let private_key = self
            .private_key()
            .ok_or_else(|| CryptoError::signing_key_absent("sign"))?;

        let digest = Sha512::digest(message);
        private_key
            .sign_with_rng(&mut OsRng, Pkcs1v15Sign::new::<Sha512>(), &digest)
            .map_err(|e| CryptoError::signing_error(ALGORITHM, &e.to_string()))
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<bool> {
        let digest = Sha512::digest(message);
        Ok(self
            .public_key()
            .verify(Pkcs1v15Sign::new::<Sha512>(), &digest, signature)
            .is_ok())
    }

    fn export_private(&self) -> CryptoResult<Option<String>> {
        self.private_document()
    }

    fn export_public(&self) -> CryptoResult<String> {
        Ok(self.public_document())
    }

    fn private_file_bytes(&self) -> CryptoResult<Option<Vec<u8>>> {
        Ok(self.private_document()?.map(String::into_bytes))
    }

    fn public_file_bytes(&self) -> CryptoResult<Vec<u8>> {
        Ok(self.public_document().into_bytes())
    }
}
