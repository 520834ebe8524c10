//! Tests for `passkeep list`.

use crate::support::*;

#[test]
fn test_list_empty() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "no passwords stored");
}

#[test]
fn test_list_hides_secrets() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "3 passwords");
    assert_stdout_contains(&output, "site.com");
    assert_stdout_contains(&output, "myapp");
    assert_stdout_contains(&output, "bob");
    assert_stdout_excludes(&output, "secret1");
    assert_stdout_excludes(&output, "hunter2");
}

#[test]
fn test_list_json() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.list_json();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["credentials"][1]["kind"], "App");
    assert_eq!(json["credentials"][1]["target"], "myapp");
    assert!(json["credentials"][0].get("secret").is_none());
}

#[test]
fn test_list_skips_malformed_lines() {
    let t = Test::new();
    t.write_vault(DIRTY_VAULT);

    let output = t.list_json();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["count"], 2);
}
