//! Integration tests for CLI

use assert_cmd::Command;
use git_httpd_config::service::GitHttpdConfig;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("git-httpd-config"))
}

#[test]
fn test_cli_version() {
    let mut cmd = cli();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("git-httpd-config"));
}

#[test]
fn test_cli_help_prints_usage_with_example() {
    let mut cmd = cli();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Usage: git-httpd-config"))
        .stderr(predicate::str::contains("--config <PATH>"))
        .stderr(predicate::str::contains("Example config file:"))
        .stderr(predicate::str::contains("zzzzz.example.com:443"))
        .stderr(predicate::str::contains("Client.Insecure:"))
        .stderr(predicate::str::contains("RepoRoot:"));
}

#[test]
fn test_missing_config_fails_with_usage() {
    let tmp = TempDir::new().expect("tmp");
    let missing = tmp.path().join("absent.yml");

    let mut cmd = cli();
    cmd.arg("--config").arg(&missing);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Example config file:"))
        .stderr(predicate::str::contains("os error"))
        .stderr(predicate::str::contains("Failed to load config").not());
}

#[test]
fn test_bad_field_type_reports_path() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("bad.yml");
    fs::write(&path, "Listen: [not, a, string]\n").expect("write");

    let mut cmd = cli();
    cmd.arg("--config").arg(&path);
    let stderr = cmd
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error decoding config"))
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&stderr);
    assert_eq!(stderr.matches("bad.yml").count(), 1, "path should be reported once:\n{stderr}");
}

#[test]
fn test_dump_config_merges_file_over_defaults() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("git-httpd.json");
    fs::write(&path, r#"{"Client": {"APIHost": "api.example.org"}, "RepoRoot": "/srv/git"}"#)
        .expect("write");

    let mut cmd = cli();
    cmd.arg("--config").arg(&path).arg("--dump-config");
    let output = cmd.assert().success().get_output().stdout.clone();

    let dumped: GitHttpdConfig =
        serde_yaml::from_slice(&output).expect("dumped config should be valid YAML");
    let mut expected = GitHttpdConfig::default();
    expected.client.api_host = "api.example.org".to_string();
    expected.repo_root = "/srv/git".to_string();
    similar_asserts::assert_eq!(dumped, expected);
}

#[test]
fn test_valid_config_succeeds_quietly() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("git-httpd.yml");
    fs::write(&path, "Listen: \":8080\"\n").expect("write");

    let mut cmd = cli();
    cmd.arg("--config").arg(&path);
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let mut cmd = cli();
    cmd.arg("--no-such-flag");
    cmd.assert().failure().code(2);
}
