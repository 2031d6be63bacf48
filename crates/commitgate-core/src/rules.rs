// Rust guideline compliant 2026-10-16

//! Line-level style rules.

use crate::models::Rule;

/// Substring that marks a debugger breakpoint.
pub const DEBUGGER_CALL: &str = "pdb.set_trace()";

/// Substring that marks a bare exception clause.
pub const BARE_EXCEPT: &str = "except:";

/// Trailing comment that suppresses the bare-except rule.
pub const SUPPRESSION_MARKER: &str = "# NOQA";

/// A rule hit on a single line, with the content to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit {
    /// Rule that fired.
    pub rule: Rule,
    /// Line content to report alongside the hit.
    pub reported: String,
}

/// Checks one raw line (terminator included) against every rule in order.
///
/// Returns the first rule that fires. Trailing-whitespace hits report the raw
/// line; the other rules report the line with trailing whitespace trimmed.
///
/// # Examples
///
/// ```
/// use commitgate_core::{check_line, Rule};
///
/// assert_eq!(check_line("x = 1 \n").map(|hit| hit.rule), Some(Rule::TrailingWhitespace));
/// assert!(check_line("except:  # NOQA\n").is_none());
/// ```
#[must_use]
pub fn check_line(raw: &str) -> Option<LineHit> {
    if strip_terminator(raw).ends_with(' ') {
        return Some(LineHit {
            rule: Rule::TrailingWhitespace,
            reported: raw.to_string(),
        });
    }

    let trimmed = raw.trim_end();
    if trimmed.contains(DEBUGGER_CALL) {
        return Some(LineHit {
            rule: Rule::DebuggerBreakpoint,
            reported: trimmed.to_string(),
        });
    }

    if trimmed.contains(BARE_EXCEPT) && !trimmed.ends_with(SUPPRESSION_MARKER) {
        return Some(LineHit {
            rule: Rule::BareExcept,
            reported: trimmed.to_string(),
        });
    }

    None
}

/// Removes a single trailing `\n`, `\r\n`, or lone `\r`.
fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_of(line: &str) -> Option<Rule> {
        check_line(line).map(|hit| hit.rule)
    }

    #[test]
    fn test_clean_lines_pass() {
        assert_eq!(rule_of("x = 1\n"), None);
        assert_eq!(rule_of("\n"), None);
        assert_eq!(rule_of(""), None);
        assert_eq!(rule_of("    return value"), None);
    }

    #[test]
    fn test_trailing_space_reports_raw_line() {
        let hit = check_line("x = 1 \n").unwrap();
        assert_eq!(hit.rule, Rule::TrailingWhitespace);
        assert_eq!(hit.reported, "x = 1 \n");
    }

    #[test]
    fn test_trailing_space_on_last_line_without_newline() {
        assert_eq!(rule_of("x = 1 "), Some(Rule::TrailingWhitespace));
    }

    #[test]
    fn test_trailing_space_before_crlf() {
        assert_eq!(rule_of("x = 1 \r\n"), Some(Rule::TrailingWhitespace));
        assert_eq!(rule_of("x = 1\r\n"), None);
    }

    #[test]
    fn test_trailing_space_before_lone_cr() {
        assert_eq!(rule_of("y = 2 \r"), Some(Rule::TrailingWhitespace));
    }

    #[test]
    fn test_trailing_tab_is_not_a_space() {
        assert_eq!(rule_of("x = 1\t\n"), None);
    }

    #[test]
    fn test_debugger_anywhere_in_line() {
        // Ends in a tab, so only the debugger rule can fire.
        let hit = check_line("x = 1; import pdb; pdb.set_trace()  \t\n").unwrap();
        assert_eq!(hit.rule, Rule::DebuggerBreakpoint);
        assert_eq!(hit.reported, "x = 1; import pdb; pdb.set_trace()");
    }

    #[test]
    fn test_trailing_space_wins_over_debugger() {
        assert_eq!(
            rule_of("pdb.set_trace() \n"),
            Some(Rule::TrailingWhitespace)
        );
    }

    #[test]
    fn test_bare_except_rejected() {
        let hit = check_line("except:\n").unwrap();
        assert_eq!(hit.rule, Rule::BareExcept);
        assert_eq!(hit.reported, "except:");
    }

    #[test]
    fn test_bare_except_suppressed() {
        assert_eq!(rule_of("except:  # NOQA\n"), None);
        assert_eq!(rule_of("    except:  # NOQA"), None);
    }

    #[test]
    fn test_suppression_is_case_sensitive() {
        assert_eq!(rule_of("except:  # noqa\n"), Some(Rule::BareExcept));
    }

    #[test]
    fn test_named_except_passes() {
        assert_eq!(rule_of("except ValueError:\n"), None);
        assert_eq!(rule_of("except (KeyError, OSError) as err:\n"), None);
    }
}
