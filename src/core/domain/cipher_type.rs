//! Cipher selection: standard, key size and block mode.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::types::KeyBits;
use crate::error::ValidationError;

/// Cryptography standard.
///
/// Only standards with a registered provider can be used; the rest are
/// recognised so that asking for them fails with a clear error instead of
/// a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Standard {
    Aes,
    TripleDes,
}

impl Standard {
    /// Lowercase name used in cipher type strings.
    pub fn name(&self) -> &'static str {
        match self {
            Standard::Aes => "aes",
            Standard::TripleDes => "3des",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Standard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes" => Ok(Standard::Aes),
            "3des" | "tripledes" => Ok(Standard::TripleDes),
            other => Err(format!("unknown standard '{}'", other)),
        }
    }
}

/// Block cipher mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Cipher Block Chaining, needs an IV.
    Cbc,
    /// Electronic Codebook, IV-less.
    Ecb,
}

impl Mode {
    /// Whether an initialization vector takes part in this mode.
    pub fn uses_iv(&self) -> bool {
        match self {
            Mode::Cbc => true,
            Mode::Ecb => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Cbc => "cbc",
            Mode::Ecb => "ecb",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cbc" => Ok(Mode::Cbc),
            "ecb" => Ok(Mode::Ecb),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// A fully specified cipher: standard, key size and mode.
///
/// Written as `<standard>-<bits>-<mode>`, e.g. `aes-256-cbc`. The key size is
/// only checked for being a number here; whether the standard supports it is
/// decided by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherType {
    pub standard: Standard,
    pub key_bits: KeyBits,
    pub mode: Mode,
}

impl CipherType {
    pub fn new(standard: Standard, key_bits: KeyBits, mode: Mode) -> Self {
        Self {
            standard,
            key_bits,
            mode,
        }
    }

    /// Shorthand for an AES cipher type.
    pub fn aes(key_bits: KeyBits, mode: Mode) -> Self {
        Self::new(Standard::Aes, key_bits, mode)
    }

    /// Key length in bytes.
    pub fn key_len(&self) -> usize {
        usize::from(self.key_bits) / 8
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.standard, self.key_bits, self.mode)
    }
}

impl FromStr for CipherType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ValidationError::InvalidCipherType {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.trim().split('-').collect();
        let [standard, bits, mode] = parts.as_slice() else {
            return Err(invalid(
                "expected <standard>-<bits>-<mode>, e.g. aes-256-cbc".to_string(),
            ));
        };

        let standard = standard.parse::<Standard>().map_err(invalid)?;
        let key_bits = bits
            .parse::<KeyBits>()
            .map_err(|_| invalid(format!("key size '{}' is not a number", bits)))?;
        let mode = mode.parse::<Mode>().map_err(invalid)?;

        Ok(Self::new(standard, key_bits, mode))
    }
}
