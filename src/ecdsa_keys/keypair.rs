use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::pkcs8::{AssociatedOid, DecodePrivateKey, DecodePublicKey, EncodePublicKey};
use k256::{PublicKey, Secp256k1, SecretKey};
use rand::rngs::OsRng;
use sec1::der::Encode;
use sec1::{EcParameters, EcPrivateKey};

use crate::backend::{KeyBackend, KeyState};
use crate::error::{error_codes, CryptoError, CryptoResult};
use crate::utils::to_hex;

const ALGORITHM: &str = "ECDSA";

/// secp256k1 key material, either a full key pair or a verifying key alone
#[derive(Debug, Clone)]
pub enum EcdsaKeyMaterial {
    /// Secret scalar, with the signing key derived from it
    Full {
        secret_key: SecretKey,
        signing_key: SigningKey,
    },
    /// Public point imported on its own
    Public(VerifyingKey),
}

impl EcdsaKeyMaterial {
    /// Generate a key pair from a random scalar drawn from the OS RNG
    pub fn generate() -> Self {
        Self::from_secret_key(SecretKey::random(&mut OsRng))
    }

    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let signing_key = SigningKey::from(&secret_key);
        EcdsaKeyMaterial::Full {
            secret_key,
            signing_key,
        }
    }

    /// Import a private key from SEC1 DER, falling back to PKCS#8 DER
    ///
    /// The public point is always derived from the scalar; any public key
    /// embedded in the encoding is not trusted.
    pub fn from_private_der(der: &[u8]) -> CryptoResult<Self> {
        let secret_key = match SecretKey::from_sec1_der(der) {
            Ok(key) => key,
            Err(sec1_err) => SecretKey::from_pkcs8_der(der).map_err(|_| {
                CryptoError::decode_error(
                    "EC private key DER",
                    &sec1_err.to_string(),
                    error_codes::INVALID_DER_KEY,
                )
            })?,
        };

        Ok(Self::from_secret_key(secret_key))
    }

    /// Import a public key from SubjectPublicKeyInfo DER
    pub fn from_public_der(der: &[u8]) -> CryptoResult<Self> {
        let verifying_key = VerifyingKey::from_public_key_der(der).map_err(|e| {
            CryptoError::decode_error(
                "EC public key DER",
                &e.to_string(),
                error_codes::INVALID_DER_KEY,
            )
        })?;

        Ok(EcdsaKeyMaterial::Public(verifying_key))
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        match self {
            EcdsaKeyMaterial::Full { signing_key, .. } => signing_key.verifying_key(),
            EcdsaKeyMaterial::Public(verifying_key) => verifying_key,
        }
    }

    /// Uncompressed SEC1 encoding of the public point
    pub fn public_point(&self) -> Vec<u8> {
        self.verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    /// SEC1 `ECPrivateKey` DER, `None` when only the public key is held
    ///
    /// The encoding always carries the named-curve parameters and the
    /// uncompressed public point.
    pub fn private_der(&self) -> CryptoResult<Option<Vec<u8>>> {
        let (secret_key, signing_key) = match self {
            EcdsaKeyMaterial::Full {
                secret_key,
                signing_key,
            } => (secret_key, signing_key),
            EcdsaKeyMaterial::Public(_) => return Ok(None),
        };

        let scalar = secret_key.to_bytes();
        let point = signing_key.verifying_key().to_encoded_point(false);
        let der = EcPrivateKey {
            private_key: scalar.as_slice(),
            parameters: Some(EcParameters::NamedCurve(Secp256k1::OID)),
            public_key: Some(point.as_bytes()),
        }
        .to_der()
        .map_err(|e| CryptoError::encoding_error("SEC1 DER", &e.to_string()))?;

        Ok(Some(der))
    }

    /// SubjectPublicKeyInfo DER
    pub fn public_der(&self) -> CryptoResult<Vec<u8>> {
        let document = PublicKey::from(self.verifying_key())
            .to_public_key_der()
            .map_err(|e| CryptoError::encoding_error("SPKI DER", &e.to_string()))?;
        Ok(document.as_bytes().to_vec())
    }
}

impl KeyBackend for EcdsaKeyMaterial {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn key_state(&self) -> KeyState {
        match self {
            EcdsaKeyMaterial::Full { .. } => KeyState::PublicAndPrivate,
            EcdsaKeyMaterial::Public(_) => KeyState::PublicOnly,
        }
    }

    fn sign(&self, message: &[u8]) -> CryptoResult<Vec<u8>> {
        let signing_key = match self {
            EcdsaKeyMaterial::Full { signing_key, .. } => signing_key,
            EcdsaKeyMaterial::Public(_) => return Err(CryptoError::signing_key_absent("sign")),
        };

        let signature: Signature = signing_key
            .try_sign(message)
            .map_err(|e| CryptoError::signing_error(ALGORITHM, &e.to_string()))?;

        Ok(signature.to_der().as_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<bool> {
        let signature = Signature::from_der(signature).map_err(|e| {
            CryptoError::decode_error(
                "ECDSA signature DER",
                &e.to_string(),
                error_codes::INVALID_DER_SIGNATURE,
            )
        })?;

        // Signers outside this crate do not always produce low-S values
        let signature = match signature.normalize_s() {
            Some(normalized) => {
                log::warn!("Normalized a high-S ECDSA signature before verification");
                normalized
            }
            None => signature,
        };

        let valid = self.verifying_key().verify(message, &signature).is_ok();
        log::debug!("ECDSA verification result: {}", valid);
        Ok(valid)
    }

    fn export_private(&self) -> CryptoResult<Option<String>> {
        Ok(self.private_der()?.map(|der| to_hex(&der)))
    }

    fn export_public(&self) -> CryptoResult<String> {
        Ok(to_hex(&self.public_der()?))
    }

    fn private_file_bytes(&self) -> CryptoResult<Option<Vec<u8>>> {
        self.private_der()
    }

    fn public_file_bytes(&self) -> CryptoResult<Vec<u8>> {
        self.public_der()
    }
}
