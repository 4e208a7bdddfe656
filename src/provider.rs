/*!
 * Multi-algorithm key and signature provider
 *
 * `CryptoProvider` owns one key of a fixed `KeyVariant`, caches its exportable
 * text forms and carries a random identity. Signing, verification and export
 * dispatch through `KeyBackend`, so callers never branch on the algorithm.
 *
 * # Example
 *
 * ```
 * use birdolcrypt::{CryptoProvider, KeyVariant};
 *
 * let provider = CryptoProvider::generate(KeyVariant::Ecdsa).unwrap();
 * let signature = provider.sign_hex("hello").unwrap();
 *
 * assert!(provider.verify("hello", &signature).unwrap());
 * assert!(!provider.verify("hellx", &signature).unwrap());
 * ```
 */

use std::fmt;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::backend::{KeyBackend, KeyState};
use crate::ecdsa_keys::EcdsaKeyMaterial;
use crate::error::{CryptoError, CryptoResult};
use crate::key_management::storage::{self, PRIVATE_KEY_SUFFIX, PUBLIC_KEY_SUFFIX};
use crate::rsa_keys::RsaKeyMaterial;
use crate::utils::{from_hex, to_hex};
use crate::variant::{KeyCodec, KeyVariant, SignatureScheme};

/// Which half of a key pair a key file holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRole {
    Private,
    Public,
}

/// Key material for one algorithm family
#[derive(Debug, Clone)]
pub enum KeyMaterial {
    Rsa(RsaKeyMaterial),
    Ecdsa(EcdsaKeyMaterial),
    /// No key; only valid for `KeyVariant::None`
    Empty,
}

impl KeyMaterial {
    fn backend(&self) -> Option<&dyn KeyBackend> {
        match self {
            KeyMaterial::Rsa(key) => Some(key as &dyn KeyBackend),
            KeyMaterial::Ecdsa(key) => Some(key as &dyn KeyBackend),
            KeyMaterial::Empty => None,
        }
    }
}

/// A key of one variant, its cached exports and an instance identity
#[derive(Clone)]
pub struct CryptoProvider {
    variant: KeyVariant,
    material: KeyMaterial,
    private_key: Option<String>,
    public_key: Option<String>,
    uuid: Uuid,
}

impl CryptoProvider {
    /// Generate a fresh key pair for `variant`
    ///
    /// `KeyVariant::None` yields a provider with no key that only carries its
    /// identity.
    pub fn generate(variant: KeyVariant) -> CryptoResult<Self> {
        let material = match variant.key_codec() {
            Some(KeyCodec::XmlBase64) => {
                KeyMaterial::Rsa(RsaKeyMaterial::generate(rsa_bits(variant)?)?)
            }
            Some(KeyCodec::DerHex) => KeyMaterial::Ecdsa(EcdsaKeyMaterial::generate()),
            None => KeyMaterial::Empty,
        };

        let provider = Self::with_material(variant, material, Uuid::new_v4())?;
        log::info!("Generated {} key for provider {}", variant, provider.uuid);
        Ok(provider)
    }

    /// Import a private key as stored in a `.priv` file
    ///
    /// RSA expects the base64 document text, surrounding whitespace allowed.
    /// ECDSA expects SEC1 DER bytes (PKCS#8 DER is also accepted).
    pub fn import_private(variant: KeyVariant, bytes: &[u8]) -> CryptoResult<Self> {
        let material = match variant.key_codec() {
            Some(KeyCodec::XmlBase64) => {
                let text = String::from_utf8(bytes.to_vec())?;
                KeyMaterial::Rsa(checked_rsa(
                    variant,
                    RsaKeyMaterial::from_private_text(&text)?,
                )?)
            }
            Some(KeyCodec::DerHex) => {
                KeyMaterial::Ecdsa(EcdsaKeyMaterial::from_private_der(bytes)?)
            }
            None => {
                return Err(CryptoError::unsupported_variant("import_private", variant.name()))
            }
        };

        let provider = Self::with_material(variant, material, Uuid::new_v4())?;
        log::info!("Imported {} private key into provider {}", variant, provider.uuid);
        Ok(provider)
    }

    /// Import a public key as stored in a `.pub` file
    ///
    /// RSA reads only the modulus and exponent of the document, so a full
    /// private document is accepted too. ECDSA expects SubjectPublicKeyInfo
    /// DER bytes.
    pub fn import_public(variant: KeyVariant, bytes: &[u8]) -> CryptoResult<Self> {
        let material = match variant.key_codec() {
            Some(KeyCodec::XmlBase64) => {
                let text = String::from_utf8(bytes.to_vec())?;
                KeyMaterial::Rsa(checked_rsa(
                    variant,
                    RsaKeyMaterial::from_public_text(&text)?,
                )?)
            }
            Some(KeyCodec::DerHex) => KeyMaterial::Ecdsa(EcdsaKeyMaterial::from_public_der(bytes)?),
            None => {
                return Err(CryptoError::unsupported_variant("import_public", variant.name()))
            }
        };

        let provider = Self::with_material(variant, material, Uuid::new_v4())?;
        log::info!("Imported {} public key into provider {}", variant, provider.uuid);
        Ok(provider)
    }

    /// Load a provider from a key file
    pub fn from_key_file(variant: KeyVariant, path: &Path, role: KeyRole) -> CryptoResult<Self> {
        let bytes = storage::read_key_file(path)?;
        match role {
            KeyRole::Private => Self::import_private(variant, &bytes),
            KeyRole::Public => Self::import_public(variant, &bytes),
        }
    }

    /// Replace the key with one given in its exported text form
    ///
    /// RSA takes the base64 document text, ECDSA the hex of the SEC1 DER. The
    /// identity is kept; both cached forms are re-derived.
    pub fn set_private_key(&mut self, text: &str) -> CryptoResult<()> {
        let material = match self.variant.key_codec() {
            Some(KeyCodec::XmlBase64) => {
                KeyMaterial::Rsa(checked_rsa(
                    self.variant,
                    RsaKeyMaterial::from_private_text(text)?,
                )?)
            }
            Some(KeyCodec::DerHex) => {
                KeyMaterial::Ecdsa(EcdsaKeyMaterial::from_private_der(&from_hex(text.trim())?)?)
            }
            None => {
                return Err(CryptoError::unsupported_variant(
                    "set_private_key",
                    self.variant.name(),
                ))
            }
        };

        *self = Self::with_material(self.variant, material, self.uuid)?;
        log::debug!("Replaced private key of provider {}", self.uuid);
        Ok(())
    }

    /// Sign the UTF-8 bytes of `message`, returning the raw signature
    pub fn sign(&self, message: &str) -> CryptoResult<Vec<u8>> {
        let (scheme, backend) = self.signer("sign")?;
        let signature = backend.sign(message.as_bytes())?;
        log::debug!(
            "Provider {} produced a {}-byte {:?} signature",
            self.uuid,
            signature.len(),
            scheme
        );
        Ok(signature)
    }

    /// Sign `message`, returning the lowercase hex signature
    pub fn sign_hex(&self, message: &str) -> CryptoResult<String> {
        Ok(to_hex(&self.sign(message)?))
    }

    /// Verify a hex-encoded signature over `message`
    ///
    /// A signature that does not match is `Ok(false)`. Text that is not hex,
    /// or an ECDSA signature that is not valid DER, is a decode error.
    pub fn verify(&self, message: &str, signature_hex: &str) -> CryptoResult<bool> {
        let (_, backend) = self.signer("verify")?;
        let signature = from_hex(signature_hex)?;
        backend.verify(message.as_bytes(), &signature)
    }

    /// Verify a raw signature over `message`
    pub fn verify_bytes(&self, message: &str, signature: &[u8]) -> CryptoResult<bool> {
        self.signer("verify")?.1.verify(message.as_bytes(), signature)
    }

    /// Write the private key to `<base>.priv` and return that path
    pub fn export_private_to_path(&self, base: &Path) -> CryptoResult<PathBuf> {
        let bytes = self.private_file_bytes()?;
        let path = storage::write_key_file(base, PRIVATE_KEY_SUFFIX, &bytes)?;
        log::info!("Exported {} private key to {}", self.variant, path.display());
        Ok(path)
    }

    /// Write the public key to `<base>.pub` and return that path
    pub fn export_public_to_path(&self, base: &Path) -> CryptoResult<PathBuf> {
        let bytes = self.public_file_bytes()?;
        let path = storage::write_key_file(base, PUBLIC_KEY_SUFFIX, &bytes)?;
        log::info!("Exported {} public key to {}", self.variant, path.display());
        Ok(path)
    }

    /// Exact contents of a `.priv` file for this key
    pub fn private_file_bytes(&self) -> CryptoResult<Vec<u8>> {
        self.backend("export_private")?
            .private_file_bytes()?
            .ok_or_else(|| CryptoError::signing_key_absent("export_private"))
    }

    /// Exact contents of a `.pub` file for this key
    pub fn public_file_bytes(&self) -> CryptoResult<Vec<u8>> {
        self.backend("export_public")?.public_file_bytes()
    }

    pub fn variant(&self) -> KeyVariant {
        self.variant
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    /// Exported private key text, present iff the private key is held
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    /// Exported public key text, present once any key is loaded
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Key state, `None` when no key is loaded
    pub fn key_state(&self) -> Option<KeyState> {
        self.material.backend().map(|backend| backend.key_state())
    }

    fn with_material(variant: KeyVariant, material: KeyMaterial, uuid: Uuid) -> CryptoResult<Self> {
        let (private_key, public_key) = match material.backend() {
            Some(backend) => (backend.export_private()?, Some(backend.export_public()?)),
            None => (None, None),
        };

        Ok(Self {
            variant,
            material,
            private_key,
            public_key,
            uuid,
        })
    }

    fn backend(&self, operation: &str) -> CryptoResult<&dyn KeyBackend> {
        self.material
            .backend()
            .ok_or_else(|| CryptoError::unsupported_variant(operation, self.variant.name()))
    }

    /// Backend for sign/verify together with the scheme the variant signs with
    fn signer(&self, operation: &str) -> CryptoResult<(SignatureScheme, &dyn KeyBackend)> {
        let scheme = self
            .variant
            .signature_scheme()
            .ok_or_else(|| CryptoError::unsupported_variant(operation, self.variant.name()))?;
        Ok((scheme, self.backend(operation)?))
    }
}

impl fmt::Debug for CryptoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoProvider")
            .field("variant", &self.variant)
            .field("uuid", &self.uuid)
            .field("key_state", &self.key_state())
            .finish()
    }
}

fn rsa_bits(variant: KeyVariant) -> CryptoResult<usize> {
    variant
        .rsa_bits()
        .ok_or_else(|| CryptoError::unsupported_variant("rsa", variant.name()))
}

fn checked_rsa(variant: KeyVariant, key: RsaKeyMaterial) -> CryptoResult<RsaKeyMaterial> {
    key.ensure_modulus_bits(rsa_bits(variant)?)?;
    Ok(key)
}
