//! Balance tracking for one candidate statement.

use super::state::LexState;
use serde::Deserialize;

/// How a backslash inside a string or template literal escapes the following character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeMode {
    /// A character is literal whenever the character right before it is a backslash.
    ///
    /// This misreads `"a\\"`: the closing quote follows an escaped backslash, so it
    /// really ends the string, but it is treated as escaped and the string stays open.
    #[default]
    SingleLevel,
    /// A character is literal only after an odd run of backslashes.
    Counted,
}

/// Lexical position inside a candidate statement.
///
/// A cursor is created fresh at each candidate start and fed whole lines until
/// [`ScanCursor::is_open`] turns false or the input runs out.
#[derive(Debug, Clone)]
pub struct ScanCursor {
    state: LexState,
    paren_depth: isize,
    escape_mode: EscapeMode,
}

impl ScanCursor {
    pub fn new(escape_mode: EscapeMode) -> Self {
        Self {
            state: LexState::Normal,
            paren_depth: 0,
            escape_mode,
        }
    }

    pub fn state(&self) -> LexState {
        self.state
    }

    pub fn paren_depth(&self) -> isize {
        self.paren_depth
    }

    /// True while the statement still has unmatched open parentheses.
    ///
    /// Checked only between lines, so a balance that dips to zero mid-line and rises again
    /// keeps the statement open.
    pub fn is_open(&self) -> bool {
        self.paren_depth > 0
    }

    /// Advance over every character of `line`.
    ///
    /// Escape detection does not look across line boundaries: the first character of a
    /// line is never considered escaped.
    pub fn feed_line(&mut self, line: &str) {
        let mut prev: Option<char> = None;
        let mut backslash_run = 0usize;

        for ch in line.chars() {
            let escaped = self.state.is_literal()
                && match self.escape_mode {
                    EscapeMode::SingleLevel => prev == Some('\\'),
                    EscapeMode::Counted => backslash_run % 2 == 1,
                };

            if !escaped {
                let (next, delta) = self.state.step(ch, prev);
                self.state = next;
                self.paren_depth += delta.as_isize();
            }

            backslash_run = if ch == '\\' { backslash_run + 1 } else { 0 };
            prev = Some(ch);
        }
    }
}
