//! Operator prompts for values missing at decryption time.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;
use tracing::debug;

use crate::core::domain::Field;
use crate::error::{Result, ValidationError};

/// Capability for obtaining a missing request value.
pub trait Prompt {
    /// Ask for `field` and return the raw text entered.
    fn ask(&self, field: Field) -> Result<String>;
}

/// Asks on the terminal, blocking until the operator answers.
///
/// When stdin is not a terminal, one line is read from it instead so the
/// tool can be driven from scripts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&self, field: Field) -> Result<String> {
        if io::stdin().is_terminal() {
            let answer: String = Input::new()
                .with_prompt(field.prompt_text())
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer);
        }

        debug!(%field, "reading from piped stdin");
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Never blocks: every missing value is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractive;

impl Prompt for NonInteractive {
    fn ask(&self, field: Field) -> Result<String> {
        Err(ValidationError::MissingValue(field).into())
    }
}

impl<P: Prompt + ?Sized> Prompt for &P {
    fn ask(&self, field: Field) -> Result<String> {
        (**self).ask(field)
    }
}
