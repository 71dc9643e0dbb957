//! Report formatting utilities for terminal output
//!
//! Colors are raw ANSI escape sequences behind the `use_color` switch; with
//! colors off the text passes through untouched.

/// Wrap text in an ANSI style sequence when color is enabled
fn styled(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Green, for income amounts
pub fn green(text: &str, use_color: bool) -> String {
    styled(text, "32", use_color)
}

/// Red, for expense amounts and negative balances
pub fn red(text: &str, use_color: bool) -> String {
    styled(text, "31", use_color)
}

/// Yellow, for category labels
pub fn yellow(text: &str, use_color: bool) -> String {
    styled(text, "33", use_color)
}

/// Cyan, for non-negative balances
pub fn cyan(text: &str, use_color: bool) -> String {
    styled(text, "36", use_color)
}

/// Bold
pub fn bold(text: &str, use_color: bool) -> String {
    styled(text, "1", use_color)
}

/// Bold cyan, for section headers
pub fn bold_cyan(text: &str, use_color: bool) -> String {
    styled(text, "1;36", use_color)
}
