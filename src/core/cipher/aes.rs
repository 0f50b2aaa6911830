//! AES provider.
//!
//! AES-128/192/256 in CBC and ECB modes with PKCS#7 padding, built on the
//! RustCrypto `aes`, `cbc` and `ecb` crates.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};
use rand::{rngs::OsRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use super::{KeyMaterial, SymmetricCipher};
use crate::core::constants::{AES_BLOCK_SIZE, AES_KEY_SIZES};
use crate::core::domain::{Mode, Standard};
use crate::core::types::{KeyBits, SecretBytes};
use crate::error::{CipherError, Result};

/// AES block cipher provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aes;

impl SymmetricCipher for Aes {
    fn standard(&self) -> Standard {
        Standard::Aes
    }

    fn key_sizes(&self) -> &'static [KeyBits] {
        AES_KEY_SIZES
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn generate_key(&self, bits: KeyBits) -> Result<SecretBytes> {
        self.check_key_size(bits)?;
        let mut key = Zeroizing::new(vec![0u8; usize::from(bits) / 8]);
        OsRng.fill_bytes(&mut key);
        trace!(bits, "generated key");
        Ok(key)
    }

    fn generate_iv(&self) -> SecretBytes {
        let mut iv = Zeroizing::new(vec![0u8; AES_BLOCK_SIZE]);
        OsRng.fill_bytes(&mut iv);
        iv
    }

    fn encrypt(&self, plaintext: &[u8], material: &KeyMaterial) -> Result<Vec<u8>> {
        self.check_key_size(material.cipher().key_bits)?;
        material.check_key()?;

        trace!(
            cipher = %material.cipher(),
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let ciphertext = match material.cipher().mode {
            Mode::Cbc => {
                let iv = material.check_iv(AES_BLOCK_SIZE)?;
                match material.key().len() {
                    16 => cbc_encrypt::<cbc::Encryptor<Aes128>>(material, iv, plaintext)?,
                    24 => cbc_encrypt::<cbc::Encryptor<Aes192>>(material, iv, plaintext)?,
                    _ => cbc_encrypt::<cbc::Encryptor<Aes256>>(material, iv, plaintext)?,
                }
            }
            Mode::Ecb => match material.key().len() {
                16 => ecb_encrypt::<ecb::Encryptor<Aes128>>(material, plaintext)?,
                24 => ecb_encrypt::<ecb::Encryptor<Aes192>>(material, plaintext)?,
                _ => ecb_encrypt::<ecb::Encryptor<Aes256>>(material, plaintext)?,
            },
        };

        trace!(ciphertext_len = ciphertext.len(), "encrypted");
        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8], material: &KeyMaterial) -> Result<Vec<u8>> {
        self.check_key_size(material.cipher().key_bits)?;
        material.check_key()?;

        trace!(
            cipher = %material.cipher(),
            ciphertext_len = ciphertext.len(),
            "decrypting"
        );

        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidCiphertext(format!(
                "length {} is not a positive multiple of the {}-byte block size",
                ciphertext.len(),
                AES_BLOCK_SIZE
            ))
            .into());
        }

        let plaintext = match material.cipher().mode {
            Mode::Cbc => {
                let iv = material.check_iv(AES_BLOCK_SIZE)?;
                match material.key().len() {
                    16 => cbc_decrypt::<cbc::Decryptor<Aes128>>(material, iv, ciphertext)?,
                    24 => cbc_decrypt::<cbc::Decryptor<Aes192>>(material, iv, ciphertext)?,
                    _ => cbc_decrypt::<cbc::Decryptor<Aes256>>(material, iv, ciphertext)?,
                }
            }
            Mode::Ecb => match material.key().len() {
                16 => ecb_decrypt::<ecb::Decryptor<Aes128>>(material, ciphertext)?,
                24 => ecb_decrypt::<ecb::Decryptor<Aes192>>(material, ciphertext)?,
                _ => ecb_decrypt::<ecb::Decryptor<Aes256>>(material, ciphertext)?,
            },
        };

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}

fn cbc_encrypt<E>(material: &KeyMaterial, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    E: KeyIvInit + BlockEncryptMut,
{
    let cipher = E::new_from_slices(material.key(), iv).map_err(|_| material.key_mismatch())?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn ecb_encrypt<E>(material: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>>
where
    E: KeyInit + BlockEncryptMut,
{
    let cipher = E::new_from_slice(material.key()).map_err(|_| material.key_mismatch())?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<D>(material: &KeyMaterial, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let cipher = D::new_from_slices(material.key(), iv).map_err(|_| material.key_mismatch())?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| bad_padding())
}

fn ecb_decrypt<D>(material: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>>
where
    D: KeyInit + BlockDecryptMut,
{
    let cipher = D::new_from_slice(material.key()).map_err(|_| material.key_mismatch())?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| bad_padding())
}

fn bad_padding() -> crate::error::Error {
    CipherError::InvalidCiphertext("padding is invalid (wrong key, IV or mode?)".to_string()).into()
}
