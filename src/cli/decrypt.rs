//! Decrypt command.
//!
//! Missing phrase, key or IV are asked for on the terminal unless prompting
//! is disabled, in which case they are errors.

use tracing::info;

use crate::cli::operator::Operator;
use crate::cli::{output, MaterialArgs};
use crate::core::cipher::Registry;
use crate::core::config::Config;
use crate::core::domain::{Operation, SymmetricRequest};
use crate::core::prompt::{NonInteractive, Prompt, Terminal};
use crate::core::Orchestrator;
use crate::error::Result;

/// Decrypt a Base64 phrase.
pub fn execute(
    content: Option<String>,
    args: MaterialArgs,
    json: bool,
    no_input: bool,
    config: &Config,
) -> Result<()> {
    let cipher = args.cipher.resolve(config)?;
    let interactive = config.defaults.interactive && !no_input;

    info!(%cipher, interactive, "decrypting");

    let request = SymmetricRequest {
        cipher,
        operation: Operation::Decrypt,
        key: args.key,
        iv: args.iv,
        content,
    };

    let prompt: &dyn Prompt = if interactive {
        &Terminal
    } else {
        &NonInteractive
    };
    let core = Orchestrator::new(Registry::default(), Operator::default(), prompt);
    let result = core.process(&request)?;

    output::result(&result, json)
}
