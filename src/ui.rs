//! Terminal colors and icons for check output.

use colored::{ColoredString, Colorize};

/// Icon for a check outcome: ✓ (green) when passed, ✗ (red) otherwise.
pub fn outcome_icon(passed: bool) -> ColoredString {
    if passed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for report text
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for check ids and file paths
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Heavy rule framing the summary block
    pub fn rule(width: usize) -> String {
        "━".repeat(width)
    }
}
