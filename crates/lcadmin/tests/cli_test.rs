//! Integration tests for the `lcadmin` CLI binary.
//!
//! These tests validate argument parsing, help output, shell
//! completions, and error handling -- all without a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `lcadmin` binary with env isolation.
///
/// Clears all `LCADMIN_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn lcadmin_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("lcadmin");
    cmd.env("HOME", "/tmp/lcadmin-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/lcadmin-cli-test-nonexistent")
        .env_remove("LCADMIN_PROFILE")
        .env_remove("LCADMIN_SERVER")
        .env_remove("LCADMIN_OUTPUT")
        .env_remove("LCADMIN_INSECURE")
        .env_remove("LCADMIN_TIMEOUT")
        .env_remove("LCADMIN_USERNAME")
        .env_remove("LCADMIN_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = lcadmin_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    lcadmin_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("LCA data catalog")
            .and(predicate::str::contains("methods"))
            .and(predicate::str::contains("units"))
            .and(predicate::str::contains("organizations")),
    );
}

#[test]
fn test_version_flag() {
    lcadmin_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lcadmin"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    lcadmin_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    lcadmin_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = lcadmin_cmd().arg("frobnicate").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("frobnicate"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_methods_list_no_server() {
    lcadmin_cmd()
        .args(["methods", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("server"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_invalid_page_size() {
    // Page size must be one of 5, 10, 20; the check runs before any
    // network access, so no server is needed.
    let output = lcadmin_cmd()
        .args([
            "--server",
            "https://lca.example.invalid",
            "methods",
            "list",
            "--page-size",
            "15",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("5, 10, 20"),
        "Expected allowed page sizes in error:\n{text}"
    );
}

#[test]
fn test_invalid_uuid_argument() {
    let output = lcadmin_cmd()
        .args([
            "--server",
            "https://lca.example.invalid",
            "units",
            "get",
            "not-a-uuid",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("UUID"),
        "Expected UUID validation error:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = lcadmin_cmd()
        .args(["--output", "invalid", "methods", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists -- it renders the defaults.
    lcadmin_cmd().args(["config", "show"]).assert().success();
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_methods_subcommands_exist() {
    lcadmin_cmd()
        .args(["methods", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("perspectives")),
        );
}

#[test]
fn test_categories_scope_flags_exist() {
    lcadmin_cmd()
        .args(["categories", "list", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--method")
                .and(predicate::str::contains("--compartment"))
                .and(predicate::str::contains("--page-size"))
                .and(predicate::str::contains("--keyword")),
        );
}

#[test]
fn test_factors_subcommands_exist() {
    lcadmin_cmd()
        .args(["factors", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export").and(predicate::str::contains("import")));
}

#[test]
fn test_config_subcommands_exist() {
    lcadmin_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-password")),
        );
}
