//! Encrypt command.

use std::io::{self, IsTerminal, Read};

use tracing::info;

use crate::cli::operator::Operator;
use crate::cli::{output, MaterialArgs};
use crate::core::cipher::Registry;
use crate::core::config::Config;
use crate::core::domain::{Field, Operation, SymmetricRequest};
use crate::core::prompt::NonInteractive;
use crate::core::Orchestrator;
use crate::error::{Result, ValidationError};

/// Encrypt `content`, or all of piped stdin when it is absent.
pub fn execute(
    content: Option<String>,
    args: MaterialArgs,
    json: bool,
    config: &Config,
) -> Result<()> {
    let cipher = args.cipher.resolve(config)?;
    let content = match content {
        Some(content) => content,
        None => read_stdin()?,
    };

    info!(%cipher, "encrypting");

    let request = SymmetricRequest {
        cipher,
        operation: Operation::Encrypt,
        key: args.key,
        iv: args.iv,
        content: Some(content),
    };

    // Encryption generates what is missing and never asks.
    let core = Orchestrator::new(Registry::default(), Operator::default(), NonInteractive);
    let result = core.process(&request)?;

    output::result(&result, json)
}

/// Read the plaintext from stdin, dropping one trailing line break.
fn read_stdin() -> Result<String> {
    if io::stdin().is_terminal() {
        return Err(ValidationError::MissingValue(Field::Content).into());
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
