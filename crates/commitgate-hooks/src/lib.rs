// Rust guideline compliant 2026-10-16

//! commitgate Git Hooks
//!
//! This crate provides the pre-commit gate:
//! - Staged file discovery through libgit2
//! - Line rule scan and external linter pass
//! - Verdict reporting on stderr
//! - Logging setup shared by the binaries

pub mod git;
pub mod linter;
pub mod logging;
pub mod pre_commit;
pub mod report;

pub use pre_commit::{check_files, pre_commit_hook, run_gate};
pub use report::{report_verdict, stderr_supports_color};
