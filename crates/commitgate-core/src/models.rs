// Rust guideline compliant 2026-10-16

//! Verdict data model: rules, violations, and the commit outcome.

use std::fmt;
use std::path::PathBuf;

/// A fixed line-level style rule.
///
/// Rules are evaluated per line in declaration order; the first one that
/// matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The line ends in a space character before its terminator.
    TrailingWhitespace,
    /// The line calls `pdb.set_trace()`.
    DebuggerBreakpoint,
    /// The line holds an `except:` clause without a `# NOQA` suppression.
    BareExcept,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Rule; 3] = [
        Rule::TrailingWhitespace,
        Rule::DebuggerBreakpoint,
        Rule::BareExcept,
    ];

    /// Returns the stable kebab-case name of the rule.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rule::TrailingWhitespace => "trailing-whitespace",
            Rule::DebuggerBreakpoint => "debugger-breakpoint",
            Rule::BareExcept => "bare-except",
        }
    }

    /// Returns the rejection reason shown to the user.
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Rule::TrailingWhitespace => "trailing whitespace",
            Rule::DebuggerBreakpoint => "debugger breakpoint left in code",
            Rule::BareExcept => "bare except clause (add a named exception or '# NOQA')",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single rule hit, reported before the commit is aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending file, as reported by the staging query.
    pub path: PathBuf,
    /// Running line counter at the offending line.
    pub line_number: usize,
    /// Line content as reported (raw for trailing whitespace, trimmed otherwise).
    pub line: String,
    /// Rule that fired.
    pub rule: Rule,
}

impl Violation {
    /// Returns the `path:line: content` context line.
    #[must_use]
    pub fn context(&self) -> String {
        format!(
            "{}:{}: {}",
            self.path.display(),
            self.line_number,
            self.line.trim_end_matches(['\n', '\r'])
        )
    }
}

/// Why a commit was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A line-level rule fired.
    Violation(Violation),
    /// The linter module is not importable by the configured interpreter.
    LinterMissing {
        /// Linter module name.
        module: String,
    },
    /// The linter ran and reported non-compliance.
    LinterFailed {
        /// Linter module name.
        module: String,
        /// Exit code, or `None` if the process died from a signal.
        status: Option<i32>,
    },
}

impl Rejection {
    /// Returns the one-line rejection message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Rejection::Violation(violation) => {
                format!("Commit rejected: {}", violation.rule.reason())
            }
            Rejection::LinterMissing { module } => {
                format!("Commit rejected: {module} is not installed, install it first (pip install {module})")
            }
            Rejection::LinterFailed { module, .. } => {
                format!("Commit rejected: {module} reported style violations")
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Terminal outcome of one gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The commit may proceed.
    Allow,
    /// The commit must be aborted.
    Reject(Rejection),
}

impl Verdict {
    /// Returns the process exit code for this verdict.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Allow => 0,
            Verdict::Reject(_) => 1,
        }
    }

    /// Returns `true` if the commit may proceed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

impl From<Violation> for Verdict {
    fn from(violation: Violation) -> Self {
        Verdict::Reject(Rejection::Violation(violation))
    }
}
