//! Integration tests for the CLI interface
//!
//! Tests the main entry point, command parsing, and the demo transcripts

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_greet_help() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("greet")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run the greeting action"));
}

#[test]
fn test_demo_help_lists_pipelines() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix-test"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("test-runner"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_demo_matrix_test_passes() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("matrix-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ PASS - Test 1: Basic functionality"))
        .stdout(predicate::str::contains("Results: 3 passed, 0 failed"))
        .stdout(predicate::str::contains("All tests passed! ✓"));
}

#[test]
fn test_demo_matrix_test_forced_failure() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("matrix-test")
        .arg("--fail")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ FAIL - Test 3: Error handling"))
        .stdout(predicate::str::contains("Results: 2 passed, 1 failed"))
        .stderr(predicate::str::contains("Test failure"));
}

#[test]
fn test_demo_lint_transcript() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking code quality..."))
        .stdout(predicate::str::contains("✓ Syntax validation"))
        .stdout(predicate::str::contains("✓ Security patterns"))
        .stdout(predicate::str::contains("All checks passed!"));
}

#[test]
fn test_demo_test_transcript() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Reusable workflow input handling: pass"))
        .stdout(predicate::str::contains("4 tests passed!"));
}

#[test]
fn test_demo_build_writes_fixtures() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("build")
        .arg("--out-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Build completed successfully!"))
        .stdout(predicate::str::contains("Files: build-info.json"));

    assert!(temp_dir.path().join("dist/build-info.json").exists());
}

#[test]
fn test_demo_build_environment_aware() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("build")
        .arg("--out-dir")
        .arg(temp_dir.path())
        .arg("--environment-aware")
        .assert()
        .success()
        .stdout(predicate::str::contains("app.json"))
        .stdout(predicate::str::contains("index.html"));

    let dist = temp_dir.path().join("dist");
    assert!(dist.join("app.json").exists());
    assert!(dist.join("index.html").exists());
}

#[test]
fn test_demo_deploy_defaults() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("deploy")
        .arg("--no-delay")
        .env_remove("ENVIRONMENT")
        .env_remove("API_URL")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deploying to development..."))
        .stdout(predicate::str::contains("API URL: http://localhost:3000"))
        .stdout(predicate::str::contains("[5/5] Running health checks..."))
        .stdout(predicate::str::contains("✓ Deployment completed successfully!"));
}

#[test]
fn test_demo_deploy_reads_environment() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("deploy")
        .arg("--no-delay")
        .env("ENVIRONMENT", "production")
        .env("API_URL", "https://api.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deploying to production..."))
        .stdout(predicate::str::contains("API URL: https://api.example.com"));
}

#[test]
fn test_demo_test_runner_default_suite() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("test-runner")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Unknown Test ==="))
        .stdout(predicate::str::contains("Runtime: unknown unknown"))
        .stdout(predicate::str::contains("1. Authentication... ✓ PASS"))
        .stdout(predicate::str::contains("✓ All 4 tests passed!"));
}

#[test]
fn test_demo_test_runner_selects_suite_by_name() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("test-runner")
        .arg("API Integration Suite")
        .arg("node")
        .arg("20")
        .assert()
        .success()
        .stdout(predicate::str::contains("Runtime: node 20"))
        .stdout(predicate::str::contains("Database Connection"));
}

#[test]
fn test_demo_package_test() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("package-test")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✓ greet(): Hello, GitHub! This is from a GitHub Package.",
        ))
        .stdout(predicate::str::contains("✓ calculate(): sum=15, product=50"))
        .stdout(predicate::str::contains("All package tests passed!"));
}

#[test]
fn test_demo_consumer() {
    let mut cmd = Command::cargo_bin("actions-lab").unwrap();
    cmd.arg("demo")
        .arg("consumer")
        .assert()
        .success()
        .stdout(predicate::str::contains("Consumer App Starting..."))
        .stdout(predicate::str::contains(
            "Result: \"Hello, Audience! This is from a GitHub Package.\"",
        ))
        .stdout(predicate::str::contains(
            "✓ Successfully consumed package from GitHub Packages!",
        ));
}
