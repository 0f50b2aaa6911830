//! Tests for `opencrypt keygen`.

use crate::support::*;

#[test]
fn test_keygen_cbc_has_key_and_iv() {
    let t = Test::new();

    let generated = json(&t.keygen_json("aes-256-cbc"));

    assert_eq!(generated["key"].as_str().unwrap().len(), 44);
    assert_eq!(generated["initialization_vector"].as_str().unwrap().len(), 24);
}

#[test]
fn test_keygen_ecb_has_no_iv() {
    let t = Test::new();

    let generated = json(&t.keygen_json("aes-192-ecb"));

    assert_eq!(generated["key"].as_str().unwrap().len(), 32);
    assert!(generated.get("initialization_vector").is_none());
}

#[test]
fn test_keygen_output_is_fresh_each_time() {
    let t = Test::new();

    let a = json(&t.keygen_json("aes-128-cbc"));
    let b = json(&t.keygen_json("aes-128-cbc"));

    assert_ne!(a["key"], b["key"]);
    assert_ne!(a["initialization_vector"], b["initialization_vector"]);
}

#[test]
fn test_keygen_material_encrypts() {
    let t = Test::new();
    let generated = json(&t.keygen_json("aes-128-cbc"));
    let key = generated["key"].as_str().unwrap();
    let iv = generated["initialization_vector"].as_str().unwrap();

    let output = t
        .cmd()
        .args(["encrypt", "--json", "-c", "aes-128-cbc", "--key", key, "--iv", iv, HELLO])
        .output()
        .unwrap();
    let sealed = json(&output);
    assert_eq!(sealed["key"], key);

    let opened = json(&t.decrypt_json(
        "aes-128-cbc",
        &["--key", key, "--iv", iv, sealed["phrase"].as_str().unwrap()],
    ));
    assert_eq!(opened["phrase"], HELLO);
}

#[test]
fn test_keygen_human_output() {
    let t = Test::new();

    let output = t.cmd().args(["keygen", "-c", "aes-256-cbc"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "key:");
    assert_stdout_contains(&output, "initialization vector:");
    assert_stdout_excludes(&output, "phrase:");
}
