//! End-to-end runs of the `kb-stress` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn kb_stress(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kb-stress"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("KB_STRESS_STORE")
        .env_remove("KB_STRESS_STORE_PATH")
        .output()
        .expect("Failed to run kb-stress")
}

/// Runs `kb-stress` with `input` written to its stdin.
fn kb_stress_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kb-stress"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("KB_STRESS_STORE")
        .env_remove("KB_STRESS_STORE_PATH")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run kb-stress");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait for kb-stress")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}

#[test]
fn test_generate_then_check_only_run() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("papers.jsonl");
    let report = temp_dir.path().join("report.json");

    let output = kb_stress(&[
        "generate",
        "--records",
        "150",
        "--seed",
        "42",
        "--output",
        path_str(&store),
    ]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Seed: 42"));
    assert_eq!(std::fs::read_to_string(&store).unwrap().lines().count(), 150);

    let output = kb_stress(&[
        "run",
        "--test-only",
        "--test-queries",
        "5",
        "--store",
        "jsonl",
        "--store-path",
        path_str(&store),
        "--report-json",
        path_str(&report),
        "--seed",
        "3",
    ]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("OVERALL"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["seed"], 3);
    assert!(json["loader"].is_null());
    assert_eq!(json["integrity"]["total_records"], 150);
}

#[test]
fn test_generate_refuses_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("papers.jsonl");
    std::fs::write(&store, "").unwrap();

    let output = kb_stress(&["generate", "--records", "5", "--output", path_str(&store)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn test_unreachable_store_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("absent").join("papers.jsonl");

    let output = kb_stress(&[
        "run",
        "--no-confirm",
        "--records",
        "10",
        "--store",
        "jsonl",
        "--store-path",
        path_str(&store),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(!store.exists());
}

#[test]
fn test_jsonl_store_requires_path() {
    let output = kb_stress(&["run", "--no-confirm", "--store", "jsonl"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--store-path"));
}

#[test]
fn test_run_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("papers.jsonl");
    let config = temp_dir.path().join("harness.yaml");
    std::fs::write(
        &config,
        format!(
            "records: 60\nbatch_size: 20\ntest_queries: 4\nstore:\n  type: jsonl\n  path: {}\n",
            path_str(&store)
        ),
    )
    .unwrap();

    let output = kb_stress(&["run", "--no-confirm", "--seed", "9", "--config", path_str(&config)]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(std::fs::read_to_string(&store).unwrap().lines().count(), 60);
}

#[test]
fn test_declined_load_exits_with_one_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("papers.jsonl");

    let output = kb_stress_with_input(
        &[
            "run",
            "--records",
            "10",
            "--store",
            "jsonl",
            "--store-path",
            path_str(&store),
        ],
        "n\n",
    );
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Continue?"));
    assert!(stdout.contains("Aborted"));
    assert!(!store.exists());
}

#[test]
fn test_closed_stdin_counts_as_decline() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("papers.jsonl");

    let output = kb_stress_with_input(
        &[
            "run",
            "--records",
            "10",
            "--store",
            "jsonl",
            "--store-path",
            path_str(&store),
        ],
        "",
    );
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Aborted"));
    assert!(!store.exists());
}

#[test]
fn test_unreachable_store_fails_before_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("absent").join("papers.jsonl");

    let output = kb_stress_with_input(
        &[
            "run",
            "--records",
            "10",
            "--store",
            "jsonl",
            "--store-path",
            path_str(&store),
        ],
        "y\n",
    );
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Continue?"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(!store.exists());
}
