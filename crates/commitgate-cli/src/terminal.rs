// Rust guideline compliant 2026-10-16

//! Terminal UI utilities for the commitgate CLI.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used on stderr.
///
/// Respects `--no-color`, the `NO_COLOR` environment variable, and the
/// terminal capability check.
///
/// # Arguments
/// * `no_color` - Whether the user disabled color on the command line
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color(no_color: bool) -> bool {
    if no_color || env::var_os("NO_COLOR").is_some() {
        return false;
    }
    commitgate_hooks::stderr_supports_color()
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `color` - Whether to emit color at all
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, color: bool) {
    let choice = if color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}:", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

/// Prints a success message.
pub fn print_success(message: &str, color: bool) {
    print_status("ok", Color::Green, message, color);
}

/// Prints an error message.
pub fn print_error(message: &str, color: bool) {
    print_status("error", Color::Red, message, color);
}

/// Prints an info message.
pub fn print_info(message: &str, color: bool) {
    print_status("info", Color::Cyan, message, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_disables_color() {
        assert!(!should_use_color(true));
    }
}
