// Rust guideline compliant 2026-10-16

//! Implementation of the `commitgate check` command.
//!
//! Without paths this is the pre-commit gate over the staged set. With
//! paths, the same rules and linter run over exactly those files.

use anyhow::Result;
use commitgate_core::{Config, Verdict};
use commitgate_hooks::{check_files, git, pre_commit_hook, report_verdict};
use std::path::{Path, PathBuf};

/// Executes the check command and reports the verdict on stderr.
///
/// # Arguments
///
/// * `root` - Repository root or working directory
/// * `paths` - Explicit files to check; empty means the staged set
/// * `color` - Whether the rejection message is colored
///
/// # Returns
///
/// The verdict, whose exit code the caller should return.
///
/// # Errors
///
/// Returns an error if:
/// - The repository, config, or a file cannot be read
/// - The linter cannot be spawned
pub fn execute(root: &Path, paths: Vec<PathBuf>, color: bool) -> Result<Verdict> {
    let verdict = if paths.is_empty() {
        pre_commit_hook(root)?
    } else {
        check_paths(root, paths)?
    };
    report_verdict(&verdict, color);
    Ok(verdict)
}

/// Checks explicit paths relative to `root` without touching the index.
///
/// The config comes from the enclosing repository's root, or from `root`
/// itself outside a repository.
///
/// # Errors
///
/// Returns an error if the config or a file cannot be read.
pub fn check_paths(root: &Path, paths: Vec<PathBuf>) -> Result<Verdict> {
    let config = Config::load(&config_root(root))?;
    let files = git::filter_source_files(root, &config, paths);
    tracing::debug!(files = files.len(), "checking explicit paths");
    check_files(root, &config, &files)
}

fn config_root(root: &Path) -> PathBuf {
    let Ok(repo) = git::open_repository(root) else {
        return root.to_path_buf();
    };
    let workdir = git::workdir(&repo).map(Path::to_path_buf);
    workdir.unwrap_or_else(|_| root.to_path_buf())
}
