//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: warnings and advisories
//! - Cyan: hints
//! - Bold: values
//! - Dimmed: labels
//!
//! Results go to stdout; everything addressed to the operator goes to stderr
//! so results can be piped.

use console::style;
use std::fmt::Display;

use crate::core::domain::SymmetricResult;
use crate::error::Result;

/// Width of the label column in key/value output.
const LABEL_WIDTH: usize = 22;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ invalid ciphertext: padding is invalid`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").for_stderr().red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ initialization vector is not used by ECB and will be ignored`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").for_stderr().yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ pass --iv or drop --no-input`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").for_stderr().cyan(),
            style(msg).for_stderr().cyan()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `key:                   q3Jt...`
pub fn kv(label: &str, value: impl Display) {
    let label = format!("{}:", label);
    if colors_enabled() {
        println!(
            "{} {}",
            style(format!("{:<width$}", label, width = LABEL_WIDTH)).dim(),
            style(value).bold()
        );
    } else {
        println!("{:<width$} {}", label, value, width = LABEL_WIDTH);
    }
}

/// Print a symmetric result, as key/value lines or as JSON.
///
/// Absent fields are left out.
pub fn result(result: &SymmetricResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if let Some(key) = result.key() {
        kv("key", key);
    }
    if let Some(iv) = result.initialization_vector() {
        kv("initialization vector", iv);
    }
    if !result.phrase().is_empty() || result.key().is_none() {
        kv("phrase", result.phrase());
    }
    if let Some(encoding) = result.encoding() {
        kv("encoded", encoding);
    }
    Ok(())
}
