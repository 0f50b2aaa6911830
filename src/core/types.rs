//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use zeroize::Zeroizing;

/// Base64 text as exchanged on the command line (key, IV, ciphertext).
pub type Base64String = String;

/// Raw key or IV bytes, wiped from memory on drop.
pub type SecretBytes = Zeroizing<Vec<u8>>;

/// Key size in bits (128, 192, 256 for AES).
pub type KeyBits = u16;
