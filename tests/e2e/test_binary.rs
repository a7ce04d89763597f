//! Integration tests for the symnet binary.
//!
//! Each test runs the compiled binary against a dataset in a temp directory
//! and checks the process output and the written artifact.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_dataset(dir: &Path, content: &str) -> std::path::PathBuf {
    let input = dir.join("symbols.json");
    fs::write(&input, content).unwrap();
    input
}

/// Run the binary with `--no-browser` plus the given args.
fn run_symnet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_symnet"))
        .arg("--no-browser")
        .args(args)
        .output()
        .expect("failed to run symnet binary")
}

#[test]
fn test_renders_artifact_and_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dataset(
        dir.path(),
        r#"{"nodes":[{"id":"Sun","type":"planet"},{"id":"Gold","type":"metal"}],
            "edges":[["Sun","Gold"]]}"#,
    );
    let output = dir.path().join("net.html");

    let result = run_symnet(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Graph saved to:"));
    assert!(output.exists());

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("Sun (planet)"));
    assert!(doc.contains("Gold (metal)"));
    assert!(doc.contains("forceAtlas2Based"));
}

#[test]
fn test_missing_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("net.html");

    let result = run_symnet(&[
        dir.path().join("nope.json").to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("error:"));
    assert!(!output.exists());
}

#[test]
fn test_malformed_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dataset(dir.path(), "{broken");
    let output = dir.path().join("net.html");

    let result = run_symnet(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("not valid symbol data"));
}

#[test]
fn test_zero_variation_uses_exact_base_colors() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dataset(
        dir.path(),
        r#"{"nodes":[{"id":"Gold","type":"metal"}],"edges":[]}"#,
    );
    let output = dir.path().join("net.html");

    let result = run_symnet(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--variation",
        "0",
    ]);
    assert!(result.status.success());

    // metal base is #aaaaaa, alpha suffix "aa".
    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("#aaaaaaaa"));
}
