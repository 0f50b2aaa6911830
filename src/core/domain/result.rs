//! Symmetric result model.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use std::fmt;

use crate::core::types::Base64String;

/// Representation of the encoded fields of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Encoding {
    Base64String,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Base64String => f.write_str("Base64String"),
        }
    }
}

/// Outcome of one symmetric operation. Immutable once built.
///
/// Encryption fills every field except the IV under IV-less modes.
/// Decryption carries only the recovered phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymmetricResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<Base64String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initialization_vector: Option<Base64String>,
    phrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<Encoding>,
}

impl SymmetricResult {
    /// Result of an encryption. Everything is Base64-encoded.
    pub fn encrypted(key: &[u8], iv: Option<&[u8]>, ciphertext: &[u8]) -> Self {
        Self {
            key: Some(STANDARD.encode(key)),
            initialization_vector: iv.map(|iv| STANDARD.encode(iv)),
            phrase: STANDARD.encode(ciphertext),
            encoding: Some(Encoding::Base64String),
        }
    }

    /// Result of a decryption.
    ///
    /// UTF-8 plaintext is returned as-is. Anything else is Base64-encoded and
    /// tagged so the caller can tell the two apart.
    pub fn decrypted(plaintext: Vec<u8>) -> Self {
        let (phrase, encoding) = match String::from_utf8(plaintext) {
            Ok(text) => (text, None),
            Err(e) => (STANDARD.encode(e.as_bytes()), Some(Encoding::Base64String)),
        };
        Self {
            key: None,
            initialization_vector: None,
            phrase,
            encoding,
        }
    }

    /// Freshly generated key material with nothing encrypted.
    pub fn generated(key: &[u8], iv: Option<&[u8]>) -> Self {
        Self {
            key: Some(STANDARD.encode(key)),
            initialization_vector: iv.map(|iv| STANDARD.encode(iv)),
            phrase: String::new(),
            encoding: Some(Encoding::Base64String),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn initialization_vector(&self) -> Option<&str> {
        self.initialization_vector.as_deref()
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }
}
