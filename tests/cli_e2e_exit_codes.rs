//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Command failure, reported as `Error: <message>` on stderr
//! - Exit code 2: Invalid command-line usage (handled by clap)

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_exit_code_success() {
    let fixture = TestFixture::new();
    fixture.command().arg("list").assert().code(0);
}

#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("ghm");
    cmd.arg("--help").assert().code(0);
}

#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("ghm");
    cmd.arg("--version").assert().code(0);
}

#[test]
fn test_exit_code_command_error() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["remove", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_exit_code_unknown_subcommand() {
    let mut cmd = cargo_bin_cmd!("ghm");
    cmd.arg("clone").assert().code(2);
}
