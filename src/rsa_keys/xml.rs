//! `RSAKeyValue` XML documents
//!
//! Keys are exchanged as the XML produced by the .NET `RSA.ToXmlString` API:
//!
//! ```text
//! <RSAKeyValue><Modulus>..</Modulus><Exponent>..</Exponent><P>..</P><Q>..</Q>
//! <DP>..</DP><DQ>..</DQ><InverseQ>..</InverseQ><D>..</D></RSAKeyValue>
//! ```
//!
//! Each value is the standard base64 of a big-endian unsigned integer. `D` is
//! left-padded to the modulus length and the CRT parameters to half of it, so
//! the output matches documents written by existing tooling byte for byte.

use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::error::{error_codes, CryptoError, CryptoResult};

const ROOT: &str = "RSAKeyValue";
const DOCUMENT: &str = "RSAKeyValue document";

/// Private parameters of an `RSAKeyValue` document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateParams {
    pub p: BigUint,
    pub q: BigUint,
    pub dp: BigUint,
    pub dq: BigUint,
    pub inverse_q: BigUint,
    pub d: BigUint,
}

/// Parsed `RSAKeyValue` document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyValue {
    pub modulus: BigUint,
    pub exponent: BigUint,
    pub private: Option<RsaPrivateParams>,
}

impl RsaKeyValue {
    /// Collect the document values of a public key
    pub fn from_public_key(key: &RsaPublicKey) -> Self {
        Self {
            modulus: key.n().clone(),
            exponent: key.e().clone(),
            private: None,
        }
    }

    /// Collect the document values of a private key, deriving the CRT parameters
    pub fn from_private_key(key: &RsaPrivateKey) -> CryptoResult<Self> {
        let (p, q) = match key.primes() {
            [p, q] => (p, q),
            primes => {
                return Err(CryptoError::encoding_error(
                    DOCUMENT,
                    &format!("expected 2 primes, key has {}", primes.len()),
                ))
            }
        };

        let one = BigUint::from(1u32);
        let two = BigUint::from(2u32);
        let d = key.d();

        // p is prime, so q^(p-2) mod p is the inverse of q modulo p
        let inverse_q = q.modpow(&(p - &two), p);

        Ok(Self {
            modulus: key.n().clone(),
            exponent: key.e().clone(),
            private: Some(RsaPrivateParams {
                p: p.clone(),
                q: q.clone(),
                dp: d % &(p - &one),
                dq: d % &(q - &one),
                inverse_q,
                d: d.clone(),
            }),
        })
    }

    /// Build a public key from the modulus and exponent
    pub fn to_public_key(&self) -> CryptoResult<RsaPublicKey> {
        RsaPublicKey::new(self.modulus.clone(), self.exponent.clone()).map_err(|e| {
            CryptoError::decode_error(DOCUMENT, &e.to_string(), error_codes::INVALID_RSA_COMPONENTS)
        })
    }

    /// Build and validate a private key from the document
    pub fn to_private_key(&self) -> CryptoResult<RsaPrivateKey> {
        let params = self.private.as_ref().ok_or_else(|| {
            CryptoError::decode_error(
                DOCUMENT,
                "document holds no private parameters",
                error_codes::INVALID_XML_DOCUMENT,
            )
        })?;

        let invalid = |e: rsa::Error| {
            CryptoError::decode_error(DOCUMENT, &e.to_string(), error_codes::INVALID_RSA_COMPONENTS)
        };

        let mut key = RsaPrivateKey::from_components(
            self.modulus.clone(),
            self.exponent.clone(),
            params.d.clone(),
            vec![params.p.clone(), params.q.clone()],
        )
        .map_err(invalid)?;
        key.validate().map_err(invalid)?;
        key.precompute().map_err(invalid)?;

        Ok(key)
    }

    /// Render the document exactly as the .NET serializer does
    pub fn to_xml(&self) -> String {
        let width = modulus_width(&self.modulus);
        let half = (width + 1) / 2;

        let mut xml = String::with_capacity(width * 6);
        xml.push('<');
        xml.push_str(ROOT);
        xml.push('>');
        push_element(&mut xml, "Modulus", &self.modulus, width);
        push_element(&mut xml, "Exponent", &self.exponent, 0);
        if let Some(params) = &self.private {
            push_element(&mut xml, "P", &params.p, half);
            push_element(&mut xml, "Q", &params.q, half);
            push_element(&mut xml, "DP", &params.dp, half);
            push_element(&mut xml, "DQ", &params.dq, half);
            push_element(&mut xml, "InverseQ", &params.inverse_q, half);
            push_element(&mut xml, "D", &params.d, width);
        }
        xml.push_str("</");
        xml.push_str(ROOT);
        xml.push('>');
        xml
    }

    /// Parse a document
    ///
    /// Whitespace between elements and inside values is ignored and elements may
    /// appear in any order. The private parameters are read only when `P` is
    /// present, in which case all six must be.
    pub fn parse(xml: &str) -> CryptoResult<Self> {
        let body = xml
            .trim()
            .strip_prefix("<RSAKeyValue>")
            .and_then(|rest| rest.strip_suffix("</RSAKeyValue>"))
            .ok_or_else(|| {
                CryptoError::decode_error(
                    DOCUMENT,
                    "missing <RSAKeyValue> root element",
                    error_codes::INVALID_XML_DOCUMENT,
                )
            })?;

        let modulus = required_element(body, "Modulus")?;
        let exponent = required_element(body, "Exponent")?;

        let private = match element(body, "P")? {
            Some(p) => Some(RsaPrivateParams {
                p,
                q: required_element(body, "Q")?,
                dp: required_element(body, "DP")?,
                dq: required_element(body, "DQ")?,
                inverse_q: required_element(body, "InverseQ")?,
                d: required_element(body, "D")?,
            }),
            None => None,
        };

        Ok(Self {
            modulus,
            exponent,
            private,
        })
    }
}

fn modulus_width(modulus: &BigUint) -> usize {
    (modulus.bits() + 7) / 8
}

fn push_element(xml: &mut String, name: &str, value: &BigUint, width: usize) {
    let mut bytes = value.to_bytes_be();
    if bytes.len() < width {
        let mut padded = vec![0u8; width - bytes.len()];
        padded.extend_from_slice(&bytes);
        bytes = padded;
    }

    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&base64::encode(&bytes));
    xml.push_str("</");
    xml.push_str(name);
    xml.push('>');
}

fn required_element(body: &str, name: &str) -> CryptoResult<BigUint> {
    element(body, name)?.ok_or_else(|| {
        CryptoError::decode_error(
            DOCUMENT,
            &format!("missing <{}> element", name),
            error_codes::INVALID_XML_DOCUMENT,
        )
    })
}

fn element(body: &str, name: &str) -> CryptoResult<Option<BigUint>> {
    let open = format!("<{}>", name);
    let close = format!("</{}>", name);

    let start = match body.find(&open) {
        Some(index) => index + open.len(),
        None => return Ok(None),
    };
    if body[start..].contains(&open) {
        return Err(CryptoError::decode_error(
            DOCUMENT,
            &format!("duplicate <{}> element", name),
            error_codes::INVALID_XML_DOCUMENT,
        ));
    }
    let len = body[start..].find(&close).ok_or_else(|| {
        CryptoError::decode_error(
            DOCUMENT,
            &format!("unterminated <{}> element", name),
            error_codes::INVALID_XML_DOCUMENT,
        )
    })?;

    let text: String = body[start..start + len]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if text.is_empty() {
        return Err(CryptoError::decode_error(
            DOCUMENT,
            &format!("empty <{}> element", name),
            error_codes::INVALID_XML_DOCUMENT,
        ));
    }

    let bytes = base64::decode(&text).map_err(|e| {
        CryptoError::decode_error(
            DOCUMENT,
            &format!("<{}> is not base64: {}", name, e),
            error_codes::INVALID_BASE64,
        )
    })?;

    Ok(Some(BigUint::from_bytes_be(&bytes)))
}
