// Rust guideline compliant 2026-10-16

//! Implementation of the `commitgate config` command.

use anyhow::Result;
use commitgate_core::{Config, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

/// Renders the effective configuration for `root` as TOML.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn show(root: &Path) -> Result<String> {
    Ok(Config::load(root)?.to_toml()?)
}

/// Writes the default configuration to `.commitgate.toml` in `root`.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn init(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    Config::default().save(root)?;
    Ok(path)
}
