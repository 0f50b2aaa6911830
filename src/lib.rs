//! OpenCrypt - symmetric encryption from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Encrypt a phrase
//! │   ├── decrypt       # Decrypt a phrase, prompting for missing values
//! │   ├── keygen        # Generate key material
//! │   ├── completions   # Shell completions
//! │   ├── operator      # Operator-facing advisories
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # config.toml management
//!     ├── domain/       # CipherType, request and result models
//!     ├── cipher/       # Cipher providers
//!     │   ├── mod       # SymmetricCipher trait, KeyMaterial
//!     │   ├── aes       # AES-CBC / AES-ECB implementation
//!     │   └── registry  # Provider lookup by standard
//!     ├── events        # Observer capability
//!     ├── prompt        # Prompt capability
//!     ├── resolve       # Request -> decoded inputs
//!     └── orchestrator  # The decision core
//! ```
//!
//! # Example
//!
//! ```
//! use opencrypt::core::cipher::Registry;
//! use opencrypt::core::domain::{CipherType, Mode, SymmetricRequest};
//! use opencrypt::core::events::NullObserver;
//! use opencrypt::core::prompt::NonInteractive;
//! use opencrypt::core::Orchestrator;
//!
//! let core = Orchestrator::new(Registry::default(), NullObserver, NonInteractive);
//! let cipher = CipherType::aes(256, Mode::Cbc);
//!
//! let sealed = core.process(&SymmetricRequest::encrypt(cipher, "hello world")).unwrap();
//! let opened = core
//!     .process(
//!         &SymmetricRequest::decrypt(cipher)
//!             .with_key(sealed.key().unwrap())
//!             .with_iv(sealed.initialization_vector().unwrap())
//!             .with_content(sealed.phrase()),
//!     )
//!     .unwrap();
//!
//! assert_eq!(opened.phrase(), "hello world");
//! ```

pub mod cli;
pub mod core;
pub mod error;
