// Rust guideline compliant 2026-10-16

//! Staged file discovery.

use commitgate_core::{Config, Error, Result};
use git2::{DiffOptions, ErrorCode, Repository, Tree};
use std::path::{Path, PathBuf};

fn git_err(err: git2::Error) -> Error {
    Error::Git(err.message().to_string())
}

/// Opens the repository containing `path`.
///
/// # Errors
///
/// Returns an error if `path` is not inside a Git repository.
pub fn open_repository(path: &Path) -> Result<Repository> {
    Repository::discover(path).map_err(git_err)
}

/// Returns the working tree root of `repo`.
///
/// # Errors
///
/// Returns an error for bare repositories.
pub fn workdir(repo: &Repository) -> Result<&Path> {
    repo.workdir()
        .ok_or_else(|| Error::Git("repository has no working tree".to_string()))
}

/// Lists every path in the staged change set.
///
/// Equivalent to `git diff --cached --name-only`: HEAD's tree is diffed
/// against the index, or an empty tree when HEAD is unborn. Paths are
/// relative to the working tree root, in diff order.
///
/// # Errors
///
/// Returns an error if HEAD, the index, or the diff cannot be read.
pub fn staged_paths(repo: &Repository) -> Result<Vec<PathBuf>> {
    let head_tree = head_tree(repo)?;
    let index = repo.index().map_err(git_err)?;

    let mut options = DiffOptions::new();
    options.include_typechange(true);
    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut options))
        .map_err(git_err)?;

    Ok(diff
        .deltas()
        .filter_map(|delta| delta.new_file().path().map(Path::to_path_buf))
        .collect())
}

fn head_tree(repo: &Repository) -> Result<Option<Tree<'_>>> {
    match repo.head() {
        Ok(head) => head.peel_to_tree().map(Some).map_err(git_err),
        Err(err) if matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
            Ok(None)
        }
        Err(err) => Err(git_err(err)),
    }
}

/// Keeps paths with the configured source extension that exist under `root`.
///
/// Order is preserved. Deleted files drop out here.
#[must_use]
pub fn filter_source_files(root: &Path, config: &Config, paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| config.is_source_file(path) && root.join(path).is_file())
        .collect()
}

/// Lists staged source files that are still present in the working tree.
///
/// # Errors
///
/// Returns an error if the staged set cannot be read.
pub fn staged_source_files(repo: &Repository, config: &Config) -> Result<Vec<PathBuf>> {
    let root = workdir(repo)?;
    let staged = staged_paths(repo)?;
    let total = staged.len();
    let files = filter_source_files(root, config, staged);
    tracing::debug!(staged = total, source_files = files.len(), "collected staged files");
    Ok(files)
}
