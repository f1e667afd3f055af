//! Blank line collapsing applied after statements are removed.

use once_cell::sync::Lazy;
use regex::Regex;

// Lines holding only whitespace count as blank.
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());

/// Replace every run of two or more blank lines with a single blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}
