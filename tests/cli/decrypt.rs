//! Tests for `opencrypt decrypt`.

use crate::support::*;

#[test]
fn test_roundtrip_every_cipher() {
    let t = Test::new();

    for cipher in [
        "aes-128-cbc",
        "aes-192-cbc",
        "aes-256-cbc",
        "aes-128-ecb",
        "aes-192-ecb",
        "aes-256-ecb",
    ] {
        assert_cli_roundtrip(&t, cipher, HELLO);
    }
}

#[test]
fn test_roundtrip_awkward_phrases() {
    let t = Test::new();

    for phrase in AWKWARD_PHRASES {
        assert_cli_roundtrip(&t, "aes-256-cbc", phrase);
    }
}

#[test]
fn test_decrypt_human_output_is_phrase_only() {
    let t = Test::new();
    let sealed = json(&t.encrypt_json("aes-128-ecb", HELLO));

    let output = t.decrypt(
        "aes-128-ecb",
        &[
            "--no-input",
            "--key",
            sealed["key"].as_str().unwrap(),
            sealed["phrase"].as_str().unwrap(),
        ],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "phrase:");
    assert_stdout_contains(&output, HELLO);
    assert_stdout_excludes(&output, "key:");
    assert_stdout_excludes(&output, "encoded:");
}

#[test]
fn test_decrypt_asks_for_missing_iv() {
    let t = Test::new();
    let sealed = json(&t.encrypt_json("aes-256-cbc", HELLO));

    let output = t
        .cmd()
        .args([
            "decrypt",
            "--json",
            "-c",
            "aes-256-cbc",
            "--key",
            sealed["key"].as_str().unwrap(),
            sealed["phrase"].as_str().unwrap(),
        ])
        .write_stdin(format!(
            "{}\n",
            sealed["initialization_vector"].as_str().unwrap()
        ))
        .output()
        .unwrap();

    let opened = json(&output);
    assert_eq!(opened["phrase"], HELLO);
}

#[test]
fn test_decrypt_asks_for_missing_phrase() {
    let t = Test::new();
    let sealed = json(&t.encrypt_json("aes-128-ecb", HELLO));

    let output = t
        .cmd()
        .args([
            "decrypt",
            "--json",
            "-c",
            "aes-128-ecb",
            "--key",
            sealed["key"].as_str().unwrap(),
        ])
        .write_stdin(format!("{}\n", sealed["phrase"].as_str().unwrap()))
        .output()
        .unwrap();

    let opened = json(&output);
    assert_eq!(opened["phrase"], HELLO);
}

#[test]
fn test_decrypt_no_input_fails_on_missing_key() {
    let t = Test::new();

    let output = t.decrypt(
        "aes-256-cbc",
        &["--no-input", "--iv", ZERO_BLOCK_B64, ZERO_BLOCK_B64],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "missing key");
}

#[test]
fn test_decrypt_ecb_never_needs_iv() {
    let t = Test::new();
    let sealed = json(&t.encrypt_json("aes-256-ecb", HELLO));

    let opened = json(&t.decrypt_json(
        "aes-256-ecb",
        &[
            "--key",
            sealed["key"].as_str().unwrap(),
            sealed["phrase"].as_str().unwrap(),
        ],
    ));
    assert_eq!(opened["phrase"], HELLO);
}

#[test]
fn test_decrypt_ecb_ignores_supplied_iv() {
    let t = Test::new();
    let sealed = json(&t.encrypt_json("aes-128-ecb", HELLO));

    let output = t.decrypt_json(
        "aes-128-ecb",
        &[
            "--key",
            sealed["key"].as_str().unwrap(),
            "--iv",
            "whatever",
            sealed["phrase"].as_str().unwrap(),
        ],
    );
    let opened = json(&output);
    assert_eq!(opened["phrase"], HELLO);
    assert_stderr_contains(&output, "will be ignored");
}

#[test]
fn test_decrypt_wrong_key_length() {
    let t = Test::new();
    let sealed = json(&t.encrypt_json("aes-256-cbc", HELLO));

    let output = t.decrypt_json(
        "aes-256-cbc",
        &[
            "--key",
            ZERO_BLOCK_B64,
            "--iv",
            sealed["initialization_vector"].as_str().unwrap(),
            sealed["phrase"].as_str().unwrap(),
        ],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key material");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_decrypt_truncated_ciphertext() {
    let t = Test::new();

    let output = t.decrypt_json("aes-128-ecb", &["--key", ZERO_BLOCK_B64, "AAAAAAAA"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid ciphertext");
}

#[test]
fn test_decrypt_malformed_phrase() {
    let t = Test::new();

    let output = t.decrypt_json("aes-128-ecb", &["--key", ZERO_BLOCK_B64, "not base64!"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "phrase is not valid Base64");
}
