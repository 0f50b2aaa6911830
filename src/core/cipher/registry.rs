//! Provider lookup by cryptography standard.

use std::collections::HashMap;

use tracing::debug;

use super::{Aes, SymmetricCipher};
use crate::core::domain::Standard;
use crate::error::{CipherError, Result};

/// Maps each standard to the provider that implements it.
///
/// Adding a standard means registering one more provider; nothing that
/// dispatches on standards needs to change.
pub struct Registry {
    providers: HashMap<Standard, Box<dyn SymmetricCipher>>,
}

impl Registry {
    /// A registry with no providers.
    pub fn empty() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider, replacing any previous one for its standard.
    pub fn register(&mut self, provider: Box<dyn SymmetricCipher>) {
        debug!(standard = %provider.standard(), "registering cipher provider");
        self.providers.insert(provider.standard(), provider);
    }

    /// Builder-style `register`.
    pub fn with(mut self, provider: Box<dyn SymmetricCipher>) -> Self {
        self.register(provider);
        self
    }

    /// Provider for `standard`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnsupportedStandard` if nothing is registered.
    pub fn get(&self, standard: Standard) -> Result<&dyn SymmetricCipher> {
        self.providers
            .get(&standard)
            .map(|p| &**p)
            .ok_or_else(|| CipherError::UnsupportedStandard(standard).into())
    }

    /// Standards with a registered provider.
    pub fn standards(&self) -> Vec<Standard> {
        let mut standards: Vec<Standard> = self.providers.keys().copied().collect();
        standards.sort_by_key(|s| s.name());
        standards
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::empty().with(Box::new(Aes))
    }
}
