// Rust guideline compliant 2026-10-16

//! Pre-commit hook implementation.
//!
//! Scans staged source files for trailing whitespace, debugger breakpoints,
//! and bare except clauses, then hands the batch to the external linter.

use crate::{git, linter};
use anyhow::Result;
use commitgate_core::{Config, Rejection, Scanner, Verdict};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
///
/// # Returns
///
/// The verdict for the pending commit.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a Git repository
/// - The configuration is invalid
/// - The staged set or a staged file cannot be read
/// - The linter cannot be spawned after a successful import check
pub fn pre_commit_hook(repo_path: &Path) -> Result<Verdict> {
    let repo = git::open_repository(repo_path)?;
    let config = Config::load(git::workdir(&repo)?)?;
    run_gate(&repo, &config)
}

/// Runs the gate over the staged set of `repo` with an explicit config.
///
/// # Errors
///
/// See [`pre_commit_hook`].
pub fn run_gate(repo: &Repository, config: &Config) -> Result<Verdict> {
    let root = git::workdir(repo)?;
    let files = git::staged_source_files(repo, config)?;
    check_files(root, config, &files)
}

/// Checks `files` (relative to `root`) with the line rules, then the linter.
///
/// An empty batch is allowed without touching the linter.
///
/// # Errors
///
/// Returns an error if a file cannot be read or the linter cannot be spawned.
pub fn check_files(root: &Path, config: &Config, files: &[PathBuf]) -> Result<Verdict> {
    if files.is_empty() {
        tracing::debug!("no source files to check");
        return Ok(Verdict::Allow);
    }

    let mut scanner = Scanner::new(config.line_numbering);
    if let Some(violation) = scanner.scan_all(root, files)? {
        return Ok(Verdict::from(violation));
    }
    tracing::debug!(lines = scanner.lines_seen(), "line rules passed");

    if !config.linter.enabled {
        return Ok(Verdict::Allow);
    }

    if !linter::is_available(&config.linter) {
        return Ok(Verdict::Reject(Rejection::LinterMissing {
            module: config.linter.module.clone(),
        }));
    }

    let status = linter::run(&config.linter, root, files)?;
    if !status.success() {
        tracing::debug!(code = ?status.code(), "linter reported violations");
        return Ok(Verdict::Reject(Rejection::LinterFailed {
            module: config.linter.module.clone(),
            status: status.code(),
        }));
    }

    Ok(Verdict::Allow)
}
