//! Keygen command - fresh key material without encrypting anything.

use crate::cli::operator::Operator;
use crate::cli::{output, CipherArgs};
use crate::core::cipher::Registry;
use crate::core::config::Config;
use crate::core::prompt::NonInteractive;
use crate::core::Orchestrator;
use crate::error::Result;

/// Generate and print a key, plus an IV when the mode uses one.
pub fn execute(args: CipherArgs, json: bool, config: &Config) -> Result<()> {
    let cipher = args.resolve(config)?;

    let core = Orchestrator::new(Registry::default(), Operator::default(), NonInteractive);
    let result = core.generate(cipher)?;

    output::result(&result, json)
}
