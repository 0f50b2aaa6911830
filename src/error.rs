//! Error types for opencrypt.
//!
//! Every failure propagates to the invocation boundary unchanged; the core
//! never retries and never returns a partial result.

use thiserror::Error;

use crate::core::domain::{Field, Standard};

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures raised by a cipher provider or while selecting one.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("unsupported cryptography standard: {0}")]
    UnsupportedStandard(Standard),

    #[error("unsupported key size for {standard}: {bits} bits")]
    UnsupportedKeySize { standard: Standard, bits: u16 },

    #[error("invalid key material: expected a {expected}-bit key, got {actual} bits")]
    InvalidKeyMaterial { expected: u16, actual: usize },

    #[error("invalid initialization vector: expected {expected} bytes, got {actual}")]
    InvalidIv { expected: usize, actual: usize },

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),
}

/// Malformed or missing request input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} is not valid Base64: {reason}")]
    MalformedBase64 { field: Field, reason: String },

    #[error("missing {0}")]
    MissingValue(Field),

    #[error("invalid cipher type '{input}': {reason}")]
    InvalidCipherType { input: String, reason: String },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid default cipher in config: {0}")]
    InvalidCipher(String),

    #[error("failed to open log file: {0}")]
    LogFile(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
