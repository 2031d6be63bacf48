// Rust guideline compliant 2026-10-16

//! Implementation of the `commitgate install` and `commitgate uninstall` commands.
//!
//! Installation is additive: an existing pre-commit hook keeps its content
//! and gets the commitgate block appended.

use anyhow::{Context, Result};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker line that identifies the commitgate block inside a hook script.
pub const MARKER: &str = "# commitgate pre-commit gate";

/// Command the hook block runs.
pub const HOOK_COMMAND: &str = "commitgate check || exit $?";

/// What `install` did to the hook file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A new hook script was written.
    Created,
    /// The block was appended to an existing hook.
    Appended,
    /// The hook already carried the block.
    AlreadyInstalled,
    /// An existing hook was replaced (`--force`).
    Replaced,
}

/// Installs the pre-commit hook for the repository containing `repo_path`.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `force` - Overwrite an existing hook instead of appending
///
/// # Returns
///
/// The hook path and what was done to it.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a Git repository
/// - The hooks directory or hook file cannot be written
pub fn install(repo_path: &Path, force: bool) -> Result<(PathBuf, InstallOutcome)> {
    let hook_path = pre_commit_hook_path(repo_path)?;
    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let block = format!("{MARKER}\n{HOOK_COMMAND}\n");
    let outcome = if hook_path.exists() && !force {
        let content = fs::read_to_string(&hook_path)?;
        if content.contains(MARKER) {
            return Ok((hook_path, InstallOutcome::AlreadyInstalled));
        }
        fs::write(&hook_path, format!("{}\n\n{}", content.trim_end(), block))?;
        InstallOutcome::Appended
    } else {
        let existed = hook_path.exists();
        fs::write(&hook_path, format!("#!/bin/sh\n\n{block}"))?;
        if existed {
            InstallOutcome::Replaced
        } else {
            InstallOutcome::Created
        }
    };

    make_executable(&hook_path)?;
    tracing::info!(path = %hook_path.display(), ?outcome, "installed pre-commit hook");
    Ok((hook_path, outcome))
}

/// Removes the commitgate block from the pre-commit hook.
///
/// A hook left with nothing but its shebang is deleted.
///
/// # Returns
///
/// `true` if a block was removed.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or the hook cannot be
/// rewritten.
pub fn uninstall(repo_path: &Path) -> Result<bool> {
    let hook_path = pre_commit_hook_path(repo_path)?;
    if !hook_path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&hook_path)?;
    if !content.contains(MARKER) {
        return Ok(false);
    }

    let mut kept = Vec::new();
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        if line == MARKER {
            // The command line always follows the marker.
            lines.next();
            continue;
        }
        kept.push(line);
    }

    let remaining = kept.join("\n");
    let body_is_empty = remaining
        .lines()
        .all(|line| line.trim().is_empty() || line.starts_with("#!"));
    if body_is_empty {
        fs::remove_file(&hook_path)?;
    } else {
        fs::write(&hook_path, format!("{}\n", remaining.trim_end()))?;
    }
    Ok(true)
}

/// Resolves the pre-commit hook path, honoring `core.hooksPath`.
///
/// Linked worktrees share the hooks directory of the main repository, so the
/// default is resolved against the common git directory.
///
/// # Errors
///
/// Returns an error if `repo_path` is not inside a Git repository.
pub fn pre_commit_hook_path(repo_path: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(repo_path)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;

    let configured = repo
        .config()
        .ok()
        .and_then(|config| config.get_path("core.hooksPath").ok());
    let hooks_dir = match configured {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => repo.workdir().unwrap_or_else(|| repo.path()).join(dir),
        None => repo.commondir().join("hooks"),
    };
    Ok(hooks_dir.join("pre-commit"))
}

fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)
            .with_context(|| format!("reading {}", path.display()))?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
