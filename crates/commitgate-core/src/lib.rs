// Rust guideline compliant 2026-10-16

//! commitgate Core Library
//!
//! This crate provides the foundational components of the commitgate hook:
//! - Data models (Rule, Violation, Rejection, Verdict)
//! - Line rules (trailing whitespace, debugger breakpoints, bare excepts)
//! - Batch scanner with a running line counter
//! - Configuration loading and validation
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod rules;
pub mod scan;

pub use config::{Config, LineNumbering, LinterConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use models::{Rejection, Rule, Verdict, Violation};
pub use rules::{check_line, LineHit};
pub use scan::Scanner;
