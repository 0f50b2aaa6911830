//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("opencrypt") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("opencrypt"));
}

#[test]
fn test_malformed_cipher_type_is_a_usage_error() {
    let t = Test::new();

    t.cmd()
        .args(["encrypt", "-c", "aes-256", HELLO])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cipher type"));
}

#[test]
fn test_unsupported_standard() {
    let t = Test::new();

    let output = t.encrypt("3des-192-cbc", HELLO);
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported cryptography standard: 3des");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unsupported_key_size() {
    let t = Test::new();

    let output = t.encrypt("aes-512-cbc", HELLO);
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported key size for aes: 512 bits");
    assert_stderr_contains(&output, "128, 192 and 256");
}

#[test]
fn test_unsupported_key_size_checked_before_prompting() {
    let t = Test::new();

    // No key, IV or phrase: the size check must fail before anything is asked.
    let output = t.decrypt("aes-100-cbc", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported key size");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_opencrypt") || out.contains("complete"));
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}
