//! Smoke tests for the compiled binary
//!
//! The document manifest is baked into the binary, so these only exercise
//! the CLI surface itself: help text, version, and clap's handling of bad
//! arguments. The pipeline behavior is covered in validation_tests.rs.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_tool() {
    Command::cargo_bin("link-warden")
        .expect("binary built")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("internal links"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("link-warden")
        .expect("binary built")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("link-warden"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    // clap reports usage errors with exit code 2, matching our convention
    // that 2 means "the tool itself failed" rather than "links are broken"
    Command::cargo_bin("link-warden")
        .expect("binary built")
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--definitely-not-a-flag"));
}
