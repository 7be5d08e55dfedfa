// tests/integration_test.rs
use std::process::Command;

use tempfile::TempDir;

fn run_binary(envs: &[(&str, &str)], extra_args: &[&str]) -> std::process::Output {
    let mut command = Command::new("cargo");
    command.args(["run", "--bin", "semver-build-vars", "--"]);
    command.args(extra_args);
    command.env_remove("INPUT_PACKAGE_VERSION");
    command.env_remove("GITHUB_SHA");
    command.env_remove("GITHUB_OUTPUT");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Failed to execute command")
}

#[test]
fn test_help() {
    let output = run_binary(&[], &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver-build-vars"));
    assert!(stdout.contains("Derive semver build variables"));
}

#[test]
fn test_version_flag() {
    let output = run_binary(&[], &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver-build-vars"));
}

#[test]
fn test_snapshot_run_writes_output_file() {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let output_path = temp_dir.path().join("github_output");

    let output = run_binary(
        &[
            ("INPUT_PACKAGE_VERSION", "v1.1.0-SNAPSHOT"),
            ("GITHUB_SHA", "abcdef0123456789abcdef0123456789abcdef01"),
            ("GITHUB_OUTPUT", output_path.to_str().unwrap()),
        ],
        &[],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let contents = std::fs::read_to_string(&output_path).expect("Output file should exist");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 12);

    assert_eq!(lines[0], "original_version=1.1.0-SNAPSHOT");
    assert_eq!(lines[1], "version=1.1.0-unstable");
    assert_eq!(lines[2], "sha_build_version=1.1.0-unstable+abcdef0");
    assert_eq!(lines[3], "sha_build_version_build=abcdef0");
    assert!(lines[8].starts_with("docker_tag=1.1.0-unstable"));

    // Timestamp lines carry a 14-digit UTC qualifier
    let timestamp = lines[5]
        .strip_prefix("timestamp_build_version_build=")
        .expect("Timestamp output should be present");
    assert_eq!(timestamp.len(), 14);
    assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(
        lines[7],
        format!("timestamp_sha_build_version_build={}.abcdef0", timestamp)
    );
}

#[test]
fn test_output_flag_overrides_destination() {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let output_path = temp_dir.path().join("custom_output");

    let output = run_binary(
        &[
            ("INPUT_PACKAGE_VERSION", "2.0.0"),
            ("GITHUB_SHA", "0123456789abcdef"),
        ],
        &["--output", output_path.to_str().unwrap()],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let contents = std::fs::read_to_string(&output_path).expect("Output file should exist");
    assert!(contents.contains("version=2.0.0\n"));
    assert!(contents.contains("sha_build_version=2.0.0+0123456\n"));
}

#[test]
fn test_missing_input_fails_without_outputs() {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let output_path = temp_dir.path().join("github_output");

    let output = run_binary(
        &[
            ("GITHUB_SHA", "abcdef0123456789"),
            ("GITHUB_OUTPUT", output_path.to_str().unwrap()),
        ],
        &[],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Required input missing"));
    assert!(!output_path.exists(), "No output should have been written");
}

#[test]
fn test_invalid_version_fails_without_outputs() {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let output_path = temp_dir.path().join("github_output");

    let output = run_binary(
        &[
            ("INPUT_PACKAGE_VERSION", "abcd"),
            ("GITHUB_SHA", "abcdef0123456789"),
            ("GITHUB_OUTPUT", output_path.to_str().unwrap()),
        ],
        &[],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid semantic version"));
    assert!(!output_path.exists(), "No output should have been written");
}
