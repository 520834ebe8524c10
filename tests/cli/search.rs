//! Tests for `passkeep search`.

use crate::support::*;

#[test]
fn test_search_shows_match() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.search("a@x.com", "site.com");
    assert_success(&output);
    assert_stdout_contains(&output, "Website:  site.com");
    assert_stdout_contains(&output, "Identity: a@x.com");
    assert_stdout_contains(&output, "Secret:   secret1");
    assert_stdout_excludes(&output, "secret2");
}

#[test]
fn test_search_is_exact() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.search("A@x.com", "site.com");
    assert_failure(&output);
    assert_stderr_contains(&output, "no matching password found");
}

#[test]
fn test_search_shows_every_match() {
    let t = Test::new();
    t.write_vault("App,a,one,x\nWebsite,a,two,x\nApp,b,three,x\n");

    let output = t.search("a", "x");
    assert_success(&output);
    assert_stdout_contains(&output, "one");
    assert_stdout_contains(&output, "two");
    assert_stdout_excludes(&output, "three");
}

#[test]
fn test_search_json() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.search_json("a@x.com", "myapp");
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["kind"], "App");
    assert_eq!(entries[0]["secret"], "secret2");
}

#[test]
fn test_search_missing_file() {
    let t = Test::new();

    let output = t.search("a", "x");
    assert_failure(&output);
    assert_stderr_contains(&output, "no matching password found");
    assert!(!t.vault_path().exists());
}
