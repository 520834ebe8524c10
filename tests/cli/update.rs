//! Tests for `passkeep update`.

use crate::support::*;

#[test]
fn test_update_changes_only_target_secret() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.update("a@x.com", "myapp", "newpass");
    assert_success(&output);
    assert_stdout_contains(&output, "password updated");

    assert_eq!(
        t.vault_contents(),
        "Website,a@x.com,secret1,site.com\n\
         App,a@x.com,newpass,myapp\n\
         Website,bob,hunter2,mail.example.org\n"
    );
}

#[test]
fn test_update_missing_fails_without_writing() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.update("a@x.com", "nothing", "pw");
    assert_failure(&output);
    assert_stderr_contains(&output, "no matching password found");
    assert_eq!(t.vault_contents(), STANDARD_VAULT);
}

#[test]
fn test_update_secret_from_stdin() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t
        .cmd()
        .args(["update", "bob", "mail.example.org"])
        .write_stdin("fresh\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert!(t.vault_contents().contains("Website,bob,fresh,mail.example.org\n"));
}

#[test]
fn test_update_rejects_comma() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.update("bob", "mail.example.org", "a,b");
    assert_failure(&output);
    assert_stderr_contains(&output, "comma");
    assert_eq!(t.vault_contents(), STANDARD_VAULT);
}

#[test]
fn test_update_first_duplicate_only() {
    let t = Test::new();
    t.write_vault("App,a,one,x\nApp,a,two,x\n");

    assert_success(&t.update("a", "x", "new"));
    assert_eq!(t.vault_contents(), "App,a,new,x\nApp,a,two,x\n");
}
