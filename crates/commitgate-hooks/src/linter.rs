// Rust guideline compliant 2026-10-16

//! External linter availability check and invocation.
//!
//! The linter runs as `<interpreter> -m <module> [args] <files>` with
//! inherited stdio, so its own diagnostics reach the user unchanged.

use commitgate_core::{Error, LinterConfig, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Returns whether the configured interpreter can import the linter module.
///
/// Any failure, including an interpreter that cannot be spawned, counts as
/// "not available".
#[must_use]
pub fn is_available(config: &LinterConfig) -> bool {
    let import = Command::new(&config.interpreter)
        .arg("-c")
        .arg(format!("import {}", config.module))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match import {
        Ok(status) => status.success(),
        Err(err) => {
            tracing::debug!(
                interpreter = %config.interpreter,
                error = %err,
                "linter import check could not spawn interpreter"
            );
            false
        }
    }
}

/// Runs the linter over `files` from `root` and waits for it to exit.
///
/// # Errors
///
/// Returns an error if the linter process cannot be spawned.
pub fn run(config: &LinterConfig, root: &Path, files: &[PathBuf]) -> Result<ExitStatus> {
    tracing::info!(
        interpreter = %config.interpreter,
        module = %config.module,
        files = files.len(),
        "running linter"
    );

    Command::new(&config.interpreter)
        .arg("-m")
        .arg(&config.module)
        .args(&config.args)
        .args(files)
        .current_dir(root)
        .status()
        .map_err(|err| {
            Error::Linter(format!(
                "failed to run {} -m {}: {}",
                config.interpreter, config.module, err
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_interpreter_is_unavailable() {
        let config = LinterConfig {
            interpreter: "commitgate-no-such-interpreter".to_string(),
            ..LinterConfig::default()
        };
        assert!(!is_available(&config));
    }

    #[test]
    fn test_missing_interpreter_run_is_an_error() {
        let config = LinterConfig {
            interpreter: "commitgate-no-such-interpreter".to_string(),
            ..LinterConfig::default()
        };
        let result = run(&config, Path::new("."), &[PathBuf::from("a.py")]);
        assert!(matches!(result, Err(Error::Linter(_))));
    }
}
