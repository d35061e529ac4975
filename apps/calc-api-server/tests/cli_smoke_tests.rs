#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for calc-api-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;

/// Helper to run the calc-api-server binary with given arguments
fn run_server(args: &[&str], envs: &[(&str, &str)]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calc-api-server"))
        .args(args)
        .envs(envs.iter().copied())
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calc-api-server")
}

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"], &[]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calc-api-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_server(&["--version"], &[]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calc-api-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_server(&["invalid-command"], &[]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Should report the bad subcommand: {stderr}");
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_server(&["--config", "/nonexistent/config.yaml", "check"], &[]);

    assert!(!output.status.success(), "Should fail when config file doesn't exist");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "Should indicate config file not found: {stderr}");
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir, "server: [unclosed\n  bind_addr: ::\n");

    let output = run_server(&["--config", &config, "check"], &[]);

    assert!(!output.status.success(), "Should fail on malformed YAML");
}

#[test]
fn test_cli_check_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(
        &temp_dir,
        "server:\n  bind_addr: \"127.0.0.1:8123\"\nlogging:\n  level: warn\n",
    );

    let output = run_server(&["--config", &config, "check"], &[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "check should succeed: {stdout}");
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("127.0.0.1:8123"));
}

#[test]
fn test_cli_print_config_applies_overrides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir, "server:\n  bind_addr: \"127.0.0.1:8123\"\n");

    let output = run_server(
        &["--config", &config, "--port", "9999", "--print-config"],
        &[("APP__SERVER__CORS_ENABLED", "true")],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed: serde_json::Value = serde_json::from_str(&stdout).expect("config is JSON");
    assert_eq!(printed["server"]["bind_addr"], "127.0.0.1:9999");
    assert_eq!(printed["server"]["cors_enabled"], true);
}

#[tokio::test]
async fn test_cli_run_keeps_serving_until_stopped() {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_calc-api-server"));
    cmd.args(["--port", "0", "run"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let mut child = cmd.spawn().expect("Failed to spawn calc-api-server");

    // A server that is still running after the timeout bound successfully.
    let waited = tokio::time::timeout(Duration::from_secs(2), child.wait()).await;
    assert!(waited.is_err(), "server exited early: {waited:?}");

    child.kill().await.expect("Failed to stop server");
}

#[cfg(unix)]
#[tokio::test]
async fn test_cli_run_stops_gracefully_on_sigterm() {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_calc-api-server"));
    cmd.args(["--port", "0", "run"])
        .env_remove("RUST_LOG")
        .env("APP__LOGGING__FORMAT", "json")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().expect("Failed to spawn calc-api-server");
    tokio::time::sleep(Duration::from_secs(1)).await;

    let pid = child.id().expect("server should still be running");
    let sent = Command::new("kill")
        .args(["-TERM", &pid.to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(sent.success());

    let output = tokio::time::timeout(Duration::from_secs(5), child.wait_with_output())
        .await
        .expect("server should exit after SIGTERM")
        .expect("Failed to collect server output");
    assert!(output.status.success(), "server exited with {:?}", output.status);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stopped = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|event| event["fields"]["message"] == "HTTP server stopped")
        .unwrap_or_else(|| panic!("no stop event in: {stderr}"));
    assert_eq!(stopped["fields"]["signal"], "SIGTERM");
    assert!(stopped["fields"]["addr"].as_str().unwrap().starts_with("127.0.0.1:"));
}
