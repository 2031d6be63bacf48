// Rust guideline compliant 2026-10-16

//! Error types for the commitgate core library.
//!
//! These cover infrastructure failures only. A commit that breaks a rule is
//! not an error; it is a [`Verdict::Reject`](crate::Verdict::Reject).

use thiserror::Error;

/// Result type alias for commitgate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for commitgate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The linter subprocess could not be driven.
    #[error("Linter error: {0}")]
    Linter(String),
}
