// Rust guideline compliant 2026-10-16

//! CLI entry point for the commitgate pre-commit hook.

use commitgate_hooks::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = logging::init_tracing(&logging::resolve_log_level(None)) {
        eprintln!("error: {err}");
        return ExitCode::from(2);
    }

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|repo_path| commitgate_hooks::pre_commit_hook(&repo_path));

    match result {
        Ok(verdict) => {
            let color = std::env::var_os("NO_COLOR").is_none()
                && commitgate_hooks::stderr_supports_color();
            commitgate_hooks::report_verdict(&verdict, color);
            ExitCode::from(u8::try_from(verdict.exit_code()).unwrap_or(1))
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
