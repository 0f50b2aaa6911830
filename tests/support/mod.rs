//! Test support utilities for opencrypt integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod prompt;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use prompt::Scripted;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated config location.
///
/// Child processes get `OPENCRYPT_CONFIG` pointed into the temp dir, so a
/// developer's own config never leaks into tests and tests can run in
/// parallel.
pub struct Test {
    /// Temporary directory holding config and log files
    pub dir: TempDir,
}

impl Test {
    /// Create a new test environment with no config file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with the given `config.toml` contents.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.config_path(), contents).expect("failed to write config");
        t
    }

    /// Path the binary will read its config from.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Path for a log file inside the temp dir.
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("opencrypt.log")
    }
}
