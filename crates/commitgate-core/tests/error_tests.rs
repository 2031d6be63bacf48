// Rust guideline compliant 2026-10-16

//! Unit tests for error types and messages.

use commitgate_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.starts_with("IO error"));
    assert!(msg.contains("file not found"));
}

#[test]
fn test_git_error_formatting() {
    let msg = Error::Git("index is locked".to_string()).to_string();
    assert_eq!(msg, "Git error: index is locked");
}

#[test]
fn test_invalid_config_formatting() {
    let msg = Error::InvalidConfig("linter.module cannot be empty".to_string()).to_string();
    assert_eq!(msg, "Invalid config: linter.module cannot be empty");
}

#[test]
fn test_linter_error_formatting() {
    let msg = Error::Linter("python3 terminated unexpectedly".to_string()).to_string();
    assert!(msg.contains("Linter error"));
}

#[test]
fn test_io_error_converts_with_question_mark() {
    fn read_missing() -> commitgate_core::Result<String> {
        Ok(std::fs::read_to_string("/definitely/not/here.py")?)
    }
    assert!(matches!(read_missing(), Err(Error::Io(_))));
}
