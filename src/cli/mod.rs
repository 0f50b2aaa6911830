//! Command-line interface.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod operator;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::domain::CipherType;
use crate::error::Result;

/// OpenCrypt - symmetric encryption from the command line.
#[derive(Parser)]
#[command(
    name = "opencrypt",
    about = "Symmetric AES encryption and decryption with Base64 key material",
    version,
    after_help = "Cipher types look like aes-256-cbc, aes-192-cbc or aes-128-ecb."
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml
    #[arg(long, global = true, value_name = "PATH", env = "OPENCRYPT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Cipher selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CipherArgs {
    /// Cipher type: <standard>-<bits>-<mode>
    #[arg(short, long, value_name = "TYPE", env = "OPENCRYPT_CIPHER")]
    pub cipher: Option<CipherType>,
}

impl CipherArgs {
    /// The cipher given on the command line, else the configured default.
    pub fn resolve(&self, config: &Config) -> Result<CipherType> {
        match self.cipher {
            Some(cipher) => Ok(cipher),
            None => config.default_cipher(),
        }
    }
}

/// Cipher plus optional key material.
#[derive(Args, Debug, Clone)]
pub struct MaterialArgs {
    #[command(flatten)]
    pub cipher: CipherArgs,

    /// Base64 key (generated on encryption when absent)
    #[arg(short, long, value_name = "BASE64")]
    pub key: Option<String>,

    /// Base64 initialization vector (ignored by ECB)
    #[arg(short, long, value_name = "BASE64")]
    pub iv: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a phrase (reads stdin when no phrase is given)
    Encrypt {
        /// Plaintext to encrypt
        content: Option<String>,

        #[command(flatten)]
        material: MaterialArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decrypt a Base64 phrase, asking for anything missing
    Decrypt {
        /// Base64 ciphertext
        content: Option<String>,

        #[command(flatten)]
        material: MaterialArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Fail instead of prompting for missing values
        #[arg(long)]
        no_input: bool,
    },

    /// Generate a key (and IV when the mode uses one)
    Keygen {
        #[command(flatten)]
        cipher: CipherArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: &Config) -> Result<()> {
    use Command::*;

    match command {
        Encrypt {
            content,
            material,
            json,
        } => encrypt::execute(content, material, json, config),
        Decrypt {
            content,
            material,
            json,
            no_input,
        } => decrypt::execute(content, material, json, no_input, config),
        Keygen { cipher, json } => keygen::execute(cipher, json, config),
        Completions { shell } => completions::execute(shell),
    }
}
