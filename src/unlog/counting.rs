//! Occurrence counting for the report.
//!
//! This count is a plain pattern search over the whole text and is independent of the
//! scanner. It also sees calls the scanner leaves alone (`x = console.log(1)`, calls inside
//! strings or comments, `console.log (1)`), so it can differ from the number of statements
//! the scanner actually removed. The report shows both.

use once_cell::sync::Lazy;
use regex::Regex;

static CONSOLE_LOG_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"console\.log\s*\(").unwrap());

pub fn count_occurrences(text: &str) -> usize {
    CONSOLE_LOG_CALL.find_iter(text).count()
}
