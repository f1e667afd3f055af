//! Statement scanner
//!
//! This module removes `console.log(...)` statements from JavaScript and TypeScript
//! source text without parsing it.
//!
//! Structure:
//!     The text is split on `\n` and walked line by line. A line whose trimmed content
//!     starts with `console.log(` is a candidate start. From there a [ScanCursor] is fed
//!     whole lines until its parenthesis balance is no longer positive; every line it
//!     consumed forms one [StatementSpan] and is dropped from the output. All other lines
//!     are copied through untouched. Finally runs of blank lines are collapsed
//!     ([blank_lines]).
//!
//! Detection
//!
//!     Detection is statement level, not expression level. `const x = console.log(1)` or
//!     `foo(console.log(1))` do not start with the prefix after trimming and are left in
//!     place, and so is `console.log (1)` with a space before the parenthesis.
//!
//! Granularity
//!
//!     The output is line granular: a line is either kept whole or dropped whole. Code
//!     that shares a line with a removed statement (`console.log(a); run();`) goes with it.
//!
//! Unterminated statements
//!
//!     When the input ends before a statement balances, the lines consumed so far are
//!     dropped by default. With [UnterminatedPolicy::Keep] only the start line is kept
//!     and scanning resumes on the line after it, so complete statements further down
//!     are still removed. Either way the span is reported with `terminated: false` and a
//!     warning is logged.

pub mod blank_lines;
pub mod cursor;
pub mod state;

pub use blank_lines::collapse_blank_lines;
pub use cursor::{EscapeMode, ScanCursor};
pub use state::{LexState, ParenDelta};

use serde::{Deserialize, Serialize};

/// Prefix a trimmed line must start with to be considered a statement start.
pub const TARGET_PREFIX: &str = "console.log(";

/// What to do with a statement whose parentheses never balance before end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnterminatedPolicy {
    #[default]
    Drop,
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub escape_mode: EscapeMode,
    pub unterminated: UnterminatedPolicy,
}

/// Inclusive range of 0-based line indices holding one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatementSpan {
    pub start: usize,
    pub end: usize,
    pub terminated: bool,
}

impl StatementSpan {
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Result of the line-granular pass, before blank lines are collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineScan<'a> {
    pub kept: Vec<&'a str>,
    /// Spans excluded from `kept`.
    pub removed: Vec<StatementSpan>,
    /// Unterminated spans whose start line stayed in `kept` under [UnterminatedPolicy::Keep].
    pub restored: Vec<StatementSpan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub text: String,
    pub removed: Vec<StatementSpan>,
    pub restored: Vec<StatementSpan>,
}

impl ScanOutcome {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Statements that ran to end of input, whether dropped or restored.
    pub fn unterminated_count(&self) -> usize {
        self.removed.iter().filter(|span| !span.terminated).count() + self.restored.len()
    }
}

/// The trim also strips U+FEFF, so a byte order mark in front of the first line does not
/// hide a statement.
pub fn is_candidate_start(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .starts_with(TARGET_PREFIX)
}

/// Remove every `console.log(...)` statement from `text` using the default options.
pub fn clean(text: &str) -> String {
    clean_with(text, &ScanOptions::default()).text
}

#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn clean_with(text: &str, options: &ScanOptions) -> ScanOutcome {
    let lines: Vec<&str> = text.split('\n').collect();
    let LineScan {
        kept,
        removed,
        restored,
    } = scan_lines(&lines, options);

    tracing::debug!(
        removed = removed.len(),
        restored = restored.len(),
        kept = kept.len(),
        "scan finished"
    );

    ScanOutcome {
        text: collapse_blank_lines(&kept.join("\n")),
        removed,
        restored,
    }
}

/// Walk `lines`, separating statement spans from the lines to keep.
pub fn scan_lines<'a>(lines: &[&'a str], options: &ScanOptions) -> LineScan<'a> {
    let mut scan = LineScan {
        kept: Vec::with_capacity(lines.len()),
        removed: Vec::new(),
        restored: Vec::new(),
    };

    let mut index = 0;
    while index < lines.len() {
        if !is_candidate_start(lines[index]) {
            scan.kept.push(lines[index]);
            index += 1;
            continue;
        }

        let span = locate_statement(lines, index, options.escape_mode);

        if span.terminated {
            tracing::trace!(start = span.start, end = span.end, "statement removed");
            index = span.end + 1;
            scan.removed.push(span);
            continue;
        }

        match options.unterminated {
            UnterminatedPolicy::Drop => {
                tracing::warn!(
                    line = span.start + 1,
                    dropped = span.line_count(),
                    "unterminated console.log statement runs to end of input; dropping it"
                );
                index = span.end + 1;
                scan.removed.push(span);
            }
            UnterminatedPolicy::Keep => {
                tracing::warn!(
                    line = span.start + 1,
                    "unterminated console.log statement runs to end of input; keeping it"
                );
                scan.kept.push(lines[span.start]);
                index = span.start + 1;
                scan.restored.push(span);
            }
        }
    }

    scan
}

/// Consume lines from the candidate start at `start` until the balance closes.
pub fn locate_statement(lines: &[&str], start: usize, escape_mode: EscapeMode) -> StatementSpan {
    let mut cursor = ScanCursor::new(escape_mode);
    let mut end = start;
    cursor.feed_line(lines[start]);

    while cursor.is_open() && end + 1 < lines.len() {
        end += 1;
        cursor.feed_line(lines[end]);
    }

    StatementSpan {
        start,
        end,
        terminated: !cursor.is_open(),
    }
}
