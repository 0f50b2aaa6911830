//! Symmetric cryptography orchestration.
//!
//! Given one request, picks the provider for its standard, settles key and
//! IV material, runs the cipher and builds the result. Holds no state
//! between requests.

use tracing::debug;

use crate::core::cipher::{KeyMaterial, Registry, SymmetricCipher};
use crate::core::domain::{CipherType, Operation, SymmetricRequest, SymmetricResult};
use crate::core::events::{Event, Observer};
use crate::core::prompt::Prompt;
use crate::core::resolve;
use crate::error::Result;

/// The decision core.
pub struct Orchestrator<O, P> {
    registry: Registry,
    observer: O,
    prompt: P,
}

impl<O: Observer, P: Prompt> Orchestrator<O, P> {
    pub fn new(registry: Registry, observer: O, prompt: P) -> Self {
        Self {
            registry,
            observer,
            prompt,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Process one request.
    ///
    /// Checks run in a fixed order: the standard must have a provider, then
    /// the key size must be supported, and only then is any material
    /// generated, prompted for or decoded.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnsupportedStandard` or
    /// `CipherError::UnsupportedKeySize` before any cipher operation runs;
    /// otherwise whatever resolution or the provider reports. A failed
    /// request yields no result.
    pub fn process(&self, request: &SymmetricRequest) -> Result<SymmetricResult> {
        let provider = self.provider_for(request.cipher)?;

        self.observer.record(&Event::Started {
            cipher: request.cipher,
            operation: request.operation,
        });

        if request.supplied_iv().is_some() && !request.cipher.mode.uses_iv() {
            self.observer.record(&Event::IvIgnored {
                cipher: request.cipher,
            });
        }

        let outcome = match request.operation {
            Operation::Encrypt => self.encrypt(provider, request),
            Operation::Decrypt => self.decrypt(provider, request),
        };

        if let Err(e) = &outcome {
            self.observer.record(&Event::Failed {
                operation: request.operation,
                reason: e.to_string(),
            });
        }
        outcome
    }

    /// Generate fresh key material for `cipher` without encrypting anything.
    /// The IV is left out for IV-less modes.
    pub fn generate(&self, cipher: CipherType) -> Result<SymmetricResult> {
        let provider = self.provider_for(cipher)?;

        let key = provider.generate_key(cipher.key_bits)?;
        self.observer.record(&Event::KeyGenerated {
            bits: cipher.key_bits,
        });

        let iv = if cipher.mode.uses_iv() {
            self.observer.record(&Event::IvGenerated);
            Some(provider.generate_iv())
        } else {
            None
        };

        Ok(SymmetricResult::generated(&key, iv.as_deref().map(|iv| iv.as_slice())))
    }

    fn provider_for(&self, cipher: CipherType) -> Result<&dyn SymmetricCipher> {
        let provider = self.registry.get(cipher.standard)?;
        provider.check_key_size(cipher.key_bits)?;
        debug!(%cipher, "provider selected");
        Ok(provider)
    }

    fn encrypt(
        &self,
        provider: &dyn SymmetricCipher,
        request: &SymmetricRequest,
    ) -> Result<SymmetricResult> {
        let input = resolve::encryption(request, provider, &self.observer)?;
        let material = KeyMaterial::new(request.cipher, input.key, input.iv);

        let ciphertext = provider.encrypt(&input.plaintext, &material)?;
        self.observer.record(&Event::Encrypted {
            bytes: input.plaintext.len(),
        });

        Ok(SymmetricResult::encrypted(
            material.key(),
            material.iv(),
            &ciphertext,
        ))
    }

    fn decrypt(
        &self,
        provider: &dyn SymmetricCipher,
        request: &SymmetricRequest,
    ) -> Result<SymmetricResult> {
        let input = resolve::decryption(request, &self.prompt, &self.observer)?;
        let material = KeyMaterial::new(request.cipher, input.key, input.iv);

        let plaintext = provider.decrypt(&input.ciphertext, &material)?;
        let bytes = plaintext.len();
        self.observer.record(&Event::Decrypted { bytes });

        let result = SymmetricResult::decrypted(plaintext);
        if result.encoding().is_some() {
            self.observer.record(&Event::BinaryPlaintext { bytes });
        }
        Ok(result)
    }
}
