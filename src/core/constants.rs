//! Constants used throughout opencrypt.
//!
//! Centralizes magic strings and configuration values.

/// AES block size in bytes. Also the IV length for CBC.
pub const AES_BLOCK_SIZE: usize = 16;

/// Key sizes AES accepts, in bits.
pub const AES_KEY_SIZES: &[u16] = &[128, 192, 256];

/// Cipher used when neither the command line nor the config names one.
pub const DEFAULT_CIPHER: &str = "aes-256-cbc";

/// Environment variable that overrides the config file path.
pub const CONFIG_ENV: &str = "OPENCRYPT_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "OPENCRYPT_LOG";

/// Config file location relative to the platform config directory.
pub const CONFIG_FILE: &str = "opencrypt/config.toml";

/// Log level for the file sink when the config names none.
pub const DEFAULT_FILE_LOG_LEVEL: &str = "info";
