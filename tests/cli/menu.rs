//! Tests for the interactive menu driven through piped stdin.

use crate::support::*;

#[test]
fn test_menu_fresh_start_notice() {
    let t = Test::new();

    let output = t.menu("9\n");
    assert_success(&output);
    assert_stdout_contains(&output, "no password file found, starting fresh");
    assert_stdout_contains(&output, "goodbye");
    assert!(!t.vault_path().exists());
}

#[test]
fn test_menu_scenario() {
    let t = Test::new();

    let output = t.menu(
        "1\na@x.com\nWebsite\nsite.com\nsecret1\n\
         1\na@x.com\napp\nmyapp\nsecret2\n\
         2\na@x.com\nsite.com\n\
         3\na@x.com\nmyapp\nnewpass\n\
         4\na@x.com\nsite.com\n\
         x\n",
    );

    assert_success(&output);
    assert_stdout_contains(&output, "password saved");
    assert_stdout_contains(&output, "secret1");
    assert_stdout_contains(&output, "password updated");
    assert_stdout_contains(&output, "deleted site.com login for a@x.com");
    assert_eq!(t.vault_contents(), "App,a@x.com,newpass,myapp\n");
}

#[test]
fn test_menu_invalid_type() {
    let t = Test::new();

    let output = t.menu("1\na@x.com\nphone\nx\npw\nq\n");
    assert_success(&output);
    assert_stderr_contains(&output, "invalid type 'phone'");
    assert!(!t.vault_path().exists());
}

#[test]
fn test_menu_misses_are_not_errors() {
    let t = Test::with_credentials(STANDARD_CREDENTIALS);

    let output = t.menu("2\nnobody\nx\n3\nnobody\nx\n4\nnobody\nx\n0\n");
    assert_success(&output);
    assert_stdout_contains(&output, "no matching password found");
    assert_eq!(t.vault_contents(), STANDARD_VAULT);
}

#[test]
fn test_menu_update_miss_skips_password_prompt() {
    let t = Test::new();

    let output = t.menu("3\nnobody\nx\n1\na\napp\nslack\npw\n");
    assert_success(&output);
    assert_stdout_contains(&output, "no matching password found");
    assert_eq!(t.vault_contents(), "App,a,pw,slack\n");
}

#[test]
fn test_menu_survives_undecodable_input() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("shell")
        .write_stdin(
            b"1\na@x.com\nwebsite\nsite.com\np\xe4ss\n\
              1\na@x.com\nwebsite\nsite.com\npass\n9\n"
                .to_vec(),
        )
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "input is not valid UTF-8");
    assert_stdout_contains(&output, "goodbye");
    assert_eq!(t.vault_contents(), "Website,a@x.com,pass,site.com\n");
}

#[test]
fn test_menu_loads_existing_file() {
    let t = Test::new();
    t.write_vault(STANDARD_VAULT);

    let output = t.cmd().arg("shell").write_stdin("2\nbob\nmail.example.org\n").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "3 passwords loaded");
    assert_stdout_contains(&output, "hunter2");
}

#[test]
fn test_menu_ends_on_eof() {
    let t = Test::new();

    let output = t.menu("");
    assert_success(&output);
    assert_stdout_contains(&output, "goodbye");
}
