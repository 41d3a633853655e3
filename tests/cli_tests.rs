#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::{Command, Output};

fn run(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_memphis-snippets"))
        .current_dir(dir)
        .env_remove("MEMPHIS_HOST")
        .env_remove("MEMPHIS_ENV")
        .env_remove("MEMPHIS_ACCOUNT_ID")
        .env_remove("MEMPHIS_AUTH_MODE")
        .env_remove("MEMPHIS_BROKER_URL")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_render_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["render", "--protocol", "sdk", "--language", "go", "--station", "orders"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let out = stdout(&output);
    assert!(out.contains("# Install: go get github.com/memphisdev/memphis.go"));
    assert!(out.contains("---- producer"));
    assert!(out.contains("---- consumer"));
    assert!(out.contains("\"orders\""));
}

#[test]
fn test_cli_render_role_json_with_form_and_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("form.yaml"),
        "station_name: orders\nusername: svc\npassword: tok-123456789\nuse_headers: true\nheaders:\n  - key: a\n    value: b\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("memphis-snippets.toml"),
        "host = \"broker.internal\"\naccount_id = 42\n",
    )
    .unwrap();

    let output = run(
        dir.path(),
        &[
            "render", "-p", "sdk", "-l", "python", "--form", "form.yaml", "--role", "producer",
            "--json",
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["role"], "producer");
    let snippet = value["snippet"].as_str().unwrap();
    assert!(snippet.contains("host=\"broker.internal\""));
    assert!(snippet.contains("account_id=42"));
    assert!(snippet.contains("headers.add(\"a\", \"b\")"));
    assert!(snippet.contains("connection_token=\"tok-123456789\""));
}

#[test]
fn test_cli_render_documentation_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["render", "-p", "sdk", "-l", "rust"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("https://"));
}

#[test]
fn test_cli_render_unsupported_pair_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["render", "-p", "rest", "-l", "nestjs"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no REST code example exists"));
}

#[test]
fn test_cli_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["render", "-p", "sdk", "-l", "go", "--config", "absent.toml"],
    );
    assert!(!output.status.success());
}

#[test]
fn test_cli_catalog_lists_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["catalog", "--protocol", "rest"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("curl"));
    assert!(!out.contains("SDK "));
}

#[test]
fn test_cli_lint_passes_with_sample_form() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["lint", "--fail-on-error", "--errors-only"]);
    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("No lint issues found"));
}

#[test]
fn test_cli_lint_fails_with_empty_form() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("empty.json"), "{}").unwrap();
    let output = run(
        dir.path(),
        &["lint", "--form", "empty.json", "--fail-on-error"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("residual_placeholder"));
}
