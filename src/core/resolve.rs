//! Request resolution.
//!
//! Turns a read-only [`SymmetricRequest`] into decoded, complete inputs for
//! one cipher call. Encryption generates whatever is missing; decryption asks
//! the operator for it. The request itself is never modified.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use zeroize::Zeroizing;

use crate::core::cipher::SymmetricCipher;
use crate::core::domain::{Field, SymmetricRequest};
use crate::core::events::{Event, Observer};
use crate::core::prompt::Prompt;
use crate::core::types::SecretBytes;
use crate::error::{Result, ValidationError};

/// Everything needed to encrypt.
#[derive(Debug)]
pub struct EncryptionInput {
    pub plaintext: Zeroizing<Vec<u8>>,
    pub key: SecretBytes,
    /// `None` for IV-less modes.
    pub iv: Option<SecretBytes>,
}

/// Everything needed to decrypt.
#[derive(Debug)]
pub struct DecryptionInput {
    pub ciphertext: Vec<u8>,
    pub key: SecretBytes,
    /// `None` for IV-less modes.
    pub iv: Option<SecretBytes>,
}

/// Resolve an encryption request, generating key and IV where absent.
///
/// A supplied IV is honoured only for modes that use one, and always comes
/// with an `IvReuse` advisory.
///
/// # Errors
///
/// Returns `ValidationError::MissingValue` if there is no plaintext,
/// `ValidationError::MalformedBase64` for undecodable key or IV, and
/// `CipherError::UnsupportedKeySize` from key generation.
pub fn encryption(
    request: &SymmetricRequest,
    provider: &dyn SymmetricCipher,
    observer: &dyn Observer,
) -> Result<EncryptionInput> {
    let plaintext = request
        .supplied_content()
        .ok_or(ValidationError::MissingValue(Field::Content))?;
    let plaintext = Zeroizing::new(plaintext.as_bytes().to_vec());

    let key = match request.supplied_key() {
        Some(encoded) => {
            let key = decode(Field::Key, encoded)?;
            observer.record(&Event::KeyProvided);
            key
        }
        None => {
            let bits = request.cipher.key_bits;
            let key = provider.generate_key(bits)?;
            observer.record(&Event::KeyGenerated { bits });
            key
        }
    };

    let iv = if !request.cipher.mode.uses_iv() {
        None
    } else if let Some(encoded) = request.supplied_iv() {
        let iv = decode(Field::InitializationVector, encoded)?;
        observer.record(&Event::IvProvided);
        observer.record(&Event::IvReuse);
        Some(iv)
    } else {
        observer.record(&Event::IvGenerated);
        Some(provider.generate_iv())
    };

    Ok(EncryptionInput { plaintext, key, iv })
}

/// Resolve a decryption request, prompting for phrase, key and IV where
/// absent. IV-less modes never prompt for an IV.
///
/// # Errors
///
/// Returns whatever the prompt returns on failure, and
/// `ValidationError::MalformedBase64` for undecodable values.
pub fn decryption(
    request: &SymmetricRequest,
    prompt: &dyn Prompt,
    observer: &dyn Observer,
) -> Result<DecryptionInput> {
    let content = fill(request.supplied_content(), Field::Content, prompt, observer)?;
    let key = fill(request.supplied_key(), Field::Key, prompt, observer)?;
    let iv = if request.cipher.mode.uses_iv() {
        Some(fill(
            request.supplied_iv(),
            Field::InitializationVector,
            prompt,
            observer,
        )?)
    } else {
        None
    };

    Ok(DecryptionInput {
        ciphertext: decode(Field::Content, &content)?.to_vec(),
        key: decode(Field::Key, &key)?,
        iv: iv
            .map(|iv| decode(Field::InitializationVector, &iv))
            .transpose()?,
    })
}

/// The supplied value, or the operator's answer when there is none.
fn fill(
    supplied: Option<&str>,
    field: Field,
    prompt: &dyn Prompt,
    observer: &dyn Observer,
) -> Result<Zeroizing<String>> {
    match supplied {
        Some(value) => Ok(Zeroizing::new(value.to_string())),
        None => {
            observer.record(&Event::Prompting(field));
            prompt.ask(field).map(Zeroizing::new)
        }
    }
}

/// Decode standard Base64, ignoring surrounding whitespace.
pub fn decode(field: Field, encoded: &str) -> Result<SecretBytes> {
    STANDARD
        .decode(encoded.trim())
        .map(Zeroizing::new)
        .map_err(|e| {
            ValidationError::MalformedBase64 {
                field,
                reason: e.to_string(),
            }
            .into()
        })
}
