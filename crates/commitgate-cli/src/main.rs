// Rust guideline compliant 2026-10-16

//! commitgate CLI Application
//!
//! Pre-commit gate for Python sources: trailing whitespace, debugger
//! breakpoints, bare excepts, and an external linter pass.

use clap::Parser;
use commitgate_cli::commands::install::InstallOutcome;
use commitgate_cli::commands::{check, config, install};
use commitgate_cli::terminal;
use commitgate_hooks::logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for failures outside the rejection taxonomy.
const EXIT_INTERNAL: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "commitgate",
    version,
    about = "commitgate: pre-commit style gate for Python sources",
    long_about = "Rejects a commit when a staged Python file has trailing whitespace, a pdb.set_trace() call, or a bare except clause, or when the external linter fails.",
    after_help = "Examples:\n  commitgate install\n  commitgate check\n  commitgate check src/app.py tests/test_app.py\n  commitgate config --init\n"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Check staged files, or the given files, and exit non-zero on rejection
    Check {
        /// Files to check instead of the staged set
        paths: Vec<PathBuf>,
    },

    /// Install the pre-commit hook
    Install {
        /// Overwrite an existing hook instead of appending to it
        #[arg(long)]
        force: bool,
    },

    /// Remove the pre-commit hook block
    Uninstall,

    /// Show the effective configuration
    Config {
        /// Write a default .commitgate.toml
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = terminal::should_use_color(cli.no_color);

    match run(cli, color) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            terminal::print_error(&format!("{err:#}"), color);
            ExitCode::from(EXIT_INTERNAL)
        }
    }
}

fn run(cli: Cli, color: bool) -> anyhow::Result<u8> {
    logging::init_tracing(&logging::resolve_log_level(cli.log_level.as_deref()))?;

    let root = match cli.repo {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Check { paths: Vec::new() }) {
        Commands::Check { paths } => {
            let verdict = check::execute(&root, paths, color)?;
            Ok(u8::try_from(verdict.exit_code()).unwrap_or(1))
        }
        Commands::Install { force } => {
            let (path, outcome) = install::install(&root, force)?;
            let message = match outcome {
                InstallOutcome::Created => format!("Installed pre-commit hook at {}", path.display()),
                InstallOutcome::Appended => {
                    format!("Appended commitgate to existing hook at {}", path.display())
                }
                InstallOutcome::Replaced => format!("Replaced pre-commit hook at {}", path.display()),
                InstallOutcome::AlreadyInstalled => {
                    format!("Pre-commit hook already installed at {}", path.display())
                }
            };
            terminal::print_success(&message, color);
            Ok(0)
        }
        Commands::Uninstall => {
            if install::uninstall(&root)? {
                terminal::print_success("Removed commitgate from the pre-commit hook", color);
            } else {
                terminal::print_info("commitgate hook was not installed", color);
            }
            Ok(0)
        }
        Commands::Config { init } => {
            if init {
                let path = config::init(&root)?;
                terminal::print_success(&format!("Wrote {}", path.display()), color);
            } else {
                print!("{}", config::show(&root)?);
            }
            Ok(0)
        }
    }
}
