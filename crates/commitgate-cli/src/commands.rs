// Rust guideline compliant 2026-10-16

//! Subcommand implementations for the `commitgate` binary.

pub mod check;
pub mod config;
pub mod install;
