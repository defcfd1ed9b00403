//! CLI integration tests
//!
//! Nothing here reaches the network: every case exercises a path that fails
//! before the fetch or the model call.

use predicates::prelude::*;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("siteaudit").unwrap()
}

#[test]
fn test_cli_requires_url_argument() {
    cmd().assert().failure().stderr(predicate::str::contains("URL"));
}

#[test]
fn test_cli_empty_url_rejected() {
    cmd()
        .arg("")
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL must not be empty"));
}

#[test]
fn test_cli_missing_api_key_rejected() {
    cmd()
        .arg("https://example.com")
        .env_remove("GEMINI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_cli_empty_api_key_rejected() {
    cmd()
        .arg("https://example.com")
        .env("GEMINI_API_KEY", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_cli_invalid_url_rejected() {
    cmd()
        .arg("not a url")
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fetch"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("marketing effectiveness"));
}

#[test]
fn test_cli_version() {
    cmd().arg("--version").assert().success();
}
