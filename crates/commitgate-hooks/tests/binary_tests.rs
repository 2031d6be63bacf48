// Rust guideline compliant 2026-10-16

//! Integration tests that run the `commitgate-pre-commit` binary.

use git2::Repository;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_hook(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_commitgate-pre-commit"))
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("COMMITGATE_LINTER_ENABLED", "false")
        .env_remove("COMMITGATE_LOG")
        .output()
        .expect("Failed to run commitgate-pre-commit")
}

fn stage(repo: &Repository, name: &str, content: &str) {
    let workdir = repo.workdir().expect("Repo should have a workdir");
    fs::write(workdir.join(name), content).expect("Failed to write file");
    let mut index = repo.index().expect("Failed to open index");
    index.add_path(Path::new(name)).expect("Failed to stage file");
    index.write().expect("Failed to write index");
}

#[test]
fn test_hook_rejects_staged_trailing_space() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let repo = Repository::init(dir.path()).expect("Failed to init repo");
    stage(&repo, "a.py", "x = 1 \n");

    let output = run_hook(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("a.py:1: x = 1 "), "stderr: {stderr}");
    assert!(stderr.contains("Commit rejected: trailing whitespace"), "stderr: {stderr}");
}

#[test]
fn test_hook_allows_empty_index_silently() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    Repository::init(dir.path()).expect("Failed to init repo");

    let output = run_hook(dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_hook_outside_repository_exits_2() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_hook(dir.path());

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error:"), "stderr: {stderr}");
}
