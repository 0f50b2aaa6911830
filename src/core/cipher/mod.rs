//! Cipher providers.
//!
//! A provider wraps one block-cipher standard: it generates key and IV
//! material and encrypts/decrypts under a given mode. Providers are looked
//! up by standard through a [`Registry`].
//!
//! ## Adding a New Standard
//!
//! 1. Implement the `SymmetricCipher` trait
//! 2. Add the implementation in a new file (e.g., `des.rs`)
//! 3. Register it in `Registry::default()`

use crate::core::domain::{CipherType, Standard};
use crate::core::types::{KeyBits, SecretBytes};
use crate::error::{CipherError, Error, Result};

mod aes;
mod registry;

pub use aes::Aes;
pub use registry::Registry;

/// Block-cipher provider for one cryptography standard.
pub trait SymmetricCipher {
    /// Standard this provider implements.
    fn standard(&self) -> Standard;

    /// Supported key sizes in bits.
    fn key_sizes(&self) -> &'static [KeyBits];

    /// Block size in bytes. IVs are exactly one block long.
    fn block_size(&self) -> usize;

    /// Generate a random key of `bits` length from a secure source.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnsupportedKeySize` if `bits` is not one of
    /// `key_sizes()`.
    fn generate_key(&self, bits: KeyBits) -> Result<SecretBytes>;

    /// Generate a random one-block IV from a secure source.
    fn generate_iv(&self) -> SecretBytes;

    /// Encrypt with padding.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyMaterial` if the key length does not
    /// match the configured size, or `CipherError::InvalidIv` if the mode
    /// needs an IV and the one given is not a block long.
    fn encrypt(&self, plaintext: &[u8], material: &KeyMaterial) -> Result<Vec<u8>>;

    /// Decrypt and strip padding.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidCiphertext` if the length is not a
    /// multiple of the block size or the padding does not validate.
    fn decrypt(&self, ciphertext: &[u8], material: &KeyMaterial) -> Result<Vec<u8>>;

    /// Fail with `UnsupportedKeySize` unless `bits` is supported.
    fn check_key_size(&self, bits: KeyBits) -> Result<()> {
        if self.key_sizes().contains(&bits) {
            Ok(())
        } else {
            Err(CipherError::UnsupportedKeySize {
                standard: self.standard(),
                bits,
            }
            .into())
        }
    }
}

/// Key and IV bound to a cipher type.
///
/// Any IV handed in for an IV-less mode is dropped here, so providers never
/// see one.
pub struct KeyMaterial {
    cipher: CipherType,
    key: SecretBytes,
    iv: Option<SecretBytes>,
}

impl KeyMaterial {
    pub fn new(cipher: CipherType, key: SecretBytes, iv: Option<SecretBytes>) -> Self {
        let iv = if cipher.mode.uses_iv() { iv } else { None };
        Self { cipher, key, iv }
    }

    pub fn cipher(&self) -> CipherType {
        self.cipher
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref().map(|iv| iv.as_slice())
    }

    /// Fail with `InvalidKeyMaterial` unless the key matches the cipher size.
    pub fn check_key(&self) -> Result<()> {
        if self.key.len() == self.cipher.key_len() {
            Ok(())
        } else {
            Err(self.key_mismatch())
        }
    }

    /// The IV, checked to be `block_size` bytes long.
    pub fn check_iv(&self, block_size: usize) -> Result<&[u8]> {
        let iv = self.iv().unwrap_or_default();
        if iv.len() != block_size {
            return Err(CipherError::InvalidIv {
                expected: block_size,
                actual: iv.len(),
            }
            .into());
        }
        Ok(iv)
    }

    pub(crate) fn key_mismatch(&self) -> Error {
        CipherError::InvalidKeyMaterial {
            expected: self.cipher.key_bits,
            actual: self.key.len() * 8,
        }
        .into()
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("cipher", &self.cipher)
            .field("key", &"[redacted]")
            .field("iv", &self.iv.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}
