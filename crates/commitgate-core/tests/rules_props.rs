// Rust guideline compliant 2026-10-16

//! Property-based tests for the line rules.
//!
//! These tests validate the rule ordering and suppression behavior across
//! generated Python-ish lines.

use commitgate_core::{check_line, Rule};
use proptest::prelude::*;

proptest! {
    /// Lines without spaces, colons, or dots can never fire a rule.
    #[test]
    fn prop_plain_lines_pass(body in "[a-zA-Z0-9_=()+\\-]{0,40}") {
        prop_assert_eq!(check_line(&format!("{body}\n")), None);
    }

    /// A space right before the terminator always wins, whatever the body holds.
    #[test]
    fn prop_trailing_space_wins(body in "[ -~]{0,40}", crlf in any::<bool>()) {
        let terminator = if crlf { "\r\n" } else { "\n" };
        let line = format!("{body} {terminator}");
        let hit = check_line(&line).expect("trailing space must fire");
        prop_assert_eq!(hit.rule, Rule::TrailingWhitespace);
        prop_assert_eq!(hit.reported, line);
    }

    /// The debugger call fires anywhere in a line that has no trailing space.
    #[test]
    fn prop_debugger_anywhere(prefix in "[ a-z;=]{0,20}", suffix in "[a-z;]{0,20}") {
        let line = format!("{prefix}pdb.set_trace(){suffix}\n");
        let hit = check_line(&line).expect("debugger call must fire");
        prop_assert_eq!(hit.rule, Rule::DebuggerBreakpoint);
        prop_assert_eq!(hit.reported, line.trim_end());
    }

    /// A trailing `# NOQA` always suppresses the bare-except rule.
    #[test]
    fn prop_noqa_suppresses_bare_except(indent in " {0,8}", gap in " {0,4}") {
        let line = format!("{indent}except:{gap}# NOQA\n");
        prop_assert_eq!(check_line(&line), None);
    }

    /// Without the marker, a bare except always fires.
    #[test]
    fn prop_bare_except_fires(indent in " {0,8}", comment in "(# [a-z]{1,10})?") {
        let line = format!("{indent}except:{comment}\n");
        let hit = check_line(&line).expect("bare except must fire");
        prop_assert_eq!(hit.rule, Rule::BareExcept);
    }
}
