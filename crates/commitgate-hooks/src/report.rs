// Rust guideline compliant 2026-10-16

//! Verdict reporting on stderr.

use commitgate_core::{Rejection, Verdict};
use std::io;
use std::process::{Command, Stdio};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines whether stderr can show ANSI colors.
///
/// Requires stderr to be a terminal and `tput colors` to report a positive
/// color count. Every failure yields `false`.
#[must_use]
pub fn stderr_supports_color() -> bool {
    if !atty::is(atty::Stream::Stderr) {
        return false;
    }
    terminal_color_count().is_some_and(|colors| colors > 0)
}

fn terminal_color_count() -> Option<i32> {
    let output = Command::new("tput")
        .arg("colors")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()?.trim().parse().ok()
}

/// Writes the diagnostic for `verdict` to `out`.
///
/// An allowed commit writes nothing. A line-level rejection writes the
/// `path:line: content` context first, then the rejection message in red.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_verdict<W: WriteColor>(verdict: &Verdict, out: &mut W) -> io::Result<()> {
    let Verdict::Reject(rejection) = verdict else {
        return Ok(());
    };

    if let Rejection::Violation(violation) = rejection {
        writeln!(out, "{}", violation.context())?;
    }

    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", rejection.message())?;
    out.reset()?;
    writeln!(out)
}

/// Prints the diagnostic for `verdict` to stderr.
///
/// Write failures are ignored; they must not change the verdict.
pub fn report_verdict(verdict: &Verdict, color: bool) {
    let choice = if color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = render_verdict(verdict, &mut stderr);
}
