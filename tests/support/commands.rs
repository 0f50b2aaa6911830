//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an opencrypt command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - OPENCRYPT_CONFIG pointing into the temporary directory
    /// - colors disabled
    /// - no inherited cipher or log overrides
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("opencrypt").expect("failed to find opencrypt binary");
        cmd.env("OPENCRYPT_CONFIG", self.config_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("OPENCRYPT_CIPHER");
        cmd.env_remove("OPENCRYPT_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `opencrypt encrypt -c <cipher> <plaintext>`.
    pub fn encrypt(&self, cipher: &str, plaintext: &str) -> Output {
        self.cmd()
            .args(["encrypt", "-c", cipher, plaintext])
            .output()
            .expect("failed to run opencrypt encrypt")
    }

    /// Shortcut for `opencrypt encrypt --json -c <cipher> <plaintext>`.
    pub fn encrypt_json(&self, cipher: &str, plaintext: &str) -> Output {
        self.cmd()
            .args(["encrypt", "--json", "-c", cipher, plaintext])
            .output()
            .expect("failed to run opencrypt encrypt --json")
    }

    /// Shortcut for `opencrypt decrypt -c <cipher> <args...>`.
    pub fn decrypt(&self, cipher: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["decrypt", "-c", cipher])
            .args(args)
            .output()
            .expect("failed to run opencrypt decrypt")
    }

    /// Shortcut for `opencrypt decrypt --json --no-input -c <cipher> <args...>`.
    pub fn decrypt_json(&self, cipher: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["decrypt", "--json", "--no-input", "-c", cipher])
            .args(args)
            .output()
            .expect("failed to run opencrypt decrypt --json")
    }

    /// Shortcut for `opencrypt keygen --json -c <cipher>`.
    pub fn keygen_json(&self, cipher: &str) -> Output {
        self.cmd()
            .args(["keygen", "--json", "-c", cipher])
            .output()
            .expect("failed to run opencrypt keygen --json")
    }
}
