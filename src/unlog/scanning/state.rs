//! Lexical states of the statement scanner.
//!
//!     The scanner never tokenizes. It only needs to know, for every character of a
//!     candidate statement, whether that character is live code (where parentheses count
//!     towards the balance) or literal text. That question is answered by a five-state
//!     machine:
//!
//!         Normal          live code
//!         InSingleQuote   inside '...'
//!         InDoubleQuote   inside "..."
//!         InTemplate      inside `...` outside of any ${...} slot
//!         InTemplateExpr  inside one or more ${...} slots of a template literal
//!
//!     Quotes only open a string from Normal. Inside a template expression slot they are
//!     plain characters, and a backtick anywhere in a template (slot or not) closes the
//!     template, dropping whatever slot depth was left open.

/// Effect of a single character on the parenthesis balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenDelta {
    Open,
    Close,
    Unchanged,
}

impl ParenDelta {
    pub fn as_isize(self) -> isize {
        match self {
            ParenDelta::Open => 1,
            ParenDelta::Close => -1,
            ParenDelta::Unchanged => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
    #[default]
    Normal,
    InSingleQuote,
    InDoubleQuote,
    InTemplate,
    /// `depth` counts the `${` openers not yet closed by a `}`; always at least 1.
    InTemplateExpr { depth: usize },
}

impl LexState {
    /// True inside string and template literals, where a backslash can escape the next character.
    pub fn is_literal(self) -> bool {
        !matches!(self, LexState::Normal)
    }

    /// True where parentheses are code rather than text.
    pub fn parens_live(self) -> bool {
        matches!(self, LexState::Normal | LexState::InTemplateExpr { .. })
    }

    /// Transition on an unescaped character.
    ///
    /// `prev` is the raw character preceding `ch` on the same line; it is only consulted
    /// to recognise the `${` slot opener.
    pub fn step(self, ch: char, prev: Option<char>) -> (LexState, ParenDelta) {
        use LexState::*;

        match (self, ch) {
            (Normal, '"') => (InDoubleQuote, ParenDelta::Unchanged),
            (Normal, '\'') => (InSingleQuote, ParenDelta::Unchanged),
            (Normal, '`') => (InTemplate, ParenDelta::Unchanged),
            (InDoubleQuote, '"') | (InSingleQuote, '\'') => (Normal, ParenDelta::Unchanged),
            (InTemplate, '`') | (InTemplateExpr { .. }, '`') => (Normal, ParenDelta::Unchanged),
            (InTemplate, '{') if prev == Some('$') => {
                (InTemplateExpr { depth: 1 }, ParenDelta::Unchanged)
            }
            (InTemplateExpr { depth }, '{') if prev == Some('$') => (
                InTemplateExpr { depth: depth + 1 },
                ParenDelta::Unchanged,
            ),
            (InTemplateExpr { depth }, '}') => {
                let next = if depth > 1 {
                    InTemplateExpr { depth: depth - 1 }
                } else {
                    InTemplate
                };
                (next, ParenDelta::Unchanged)
            }
            (state, '(') if state.parens_live() => (state, ParenDelta::Open),
            (state, ')') if state.parens_live() => (state, ParenDelta::Close),
            (state, _) => (state, ParenDelta::Unchanged),
        }
    }
}
