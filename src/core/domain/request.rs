//! Symmetric request model.
//!
//! A `SymmetricRequest` is what the caller asked for, exactly as given. It is
//! never filled in place; `core::resolve` turns it into decoded inputs.

use std::fmt;

use crate::core::domain::CipherType;
use crate::core::types::Base64String;

/// Direction of a symmetric operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => f.write_str("encryption"),
            Operation::Decrypt => f.write_str("decryption"),
        }
    }
}

/// A request input that can be prompted for or reported as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Content,
    Key,
    InitializationVector,
}

impl Field {
    /// Text shown to the operator when this field is asked for.
    pub fn prompt_text(&self) -> &'static str {
        match self {
            Field::Content => "Enter encrypted phrase",
            Field::Key => "Enter encryption key",
            Field::InitializationVector => "Enter initialization vector",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Content => f.write_str("phrase"),
            Field::Key => f.write_str("key"),
            Field::InitializationVector => f.write_str("initialization vector"),
        }
    }
}

/// One symmetric operation as requested by the caller.
#[derive(Debug, Clone)]
pub struct SymmetricRequest {
    pub cipher: CipherType,
    pub operation: Operation,
    pub key: Option<Base64String>,
    pub iv: Option<Base64String>,
    /// Plaintext for encryption, Base64 ciphertext for decryption.
    pub content: Option<String>,
}

impl SymmetricRequest {
    pub fn encrypt(cipher: CipherType, content: impl Into<String>) -> Self {
        Self {
            cipher,
            operation: Operation::Encrypt,
            key: None,
            iv: None,
            content: Some(content.into()),
        }
    }

    pub fn decrypt(cipher: CipherType) -> Self {
        Self {
            cipher,
            operation: Operation::Decrypt,
            key: None,
            iv: None,
            content: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<Base64String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_iv(mut self, iv: impl Into<Base64String>) -> Self {
        self.iv = Some(iv.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Caller-supplied key, with empty strings treated as absent.
    pub fn supplied_key(&self) -> Option<&str> {
        non_empty(self.key.as_deref())
    }

    /// Caller-supplied IV, with empty strings treated as absent.
    pub fn supplied_iv(&self) -> Option<&str> {
        non_empty(self.iv.as_deref())
    }

    /// Caller-supplied content.
    ///
    /// An empty plaintext is a legitimate thing to encrypt, so emptiness
    /// only counts as absence on the decryption side.
    pub fn supplied_content(&self) -> Option<&str> {
        match self.operation {
            Operation::Encrypt => self.content.as_deref(),
            Operation::Decrypt => non_empty(self.content.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
