//! Statistics reported after a file has been cleaned.

use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub file: String,
    pub backup: String,
    /// Pattern matches in the original text.
    pub found: usize,
    /// `found - remaining`.
    pub removed: usize,
    /// Pattern matches left in the cleaned text.
    pub remaining: usize,
    /// Statements the scanner removed. May differ from `removed`.
    pub scanner_removed: usize,
    pub unterminated: usize,
}

impl Report {
    pub fn new(
        file: impl Into<String>,
        backup: impl Into<String>,
        found: usize,
        remaining: usize,
        scanner_removed: usize,
        unterminated: usize,
    ) -> Self {
        Self {
            file: file.into(),
            backup: backup.into(),
            found,
            removed: found.saturating_sub(remaining),
            remaining,
            scanner_removed,
            unterminated,
        }
    }

    /// Human readable report, one line per item.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📖 Reading file: {}", self.file);
        let _ = writeln!(out, "💾 Backup created: {}", self.backup);
        let _ = writeln!(out, "✅ Cleaning completed!");
        let _ = writeln!(out, "📊 Statistics:");
        let _ = writeln!(out, "   - Original console.log statements: {}", self.found);
        let _ = writeln!(out, "   - Removed console.log statements: {}", self.removed);
        let _ = writeln!(out, "   - Remaining console.log statements: {}", self.remaining);
        let _ = writeln!(
            out,
            "   - Statements removed by the scanner: {}",
            self.scanner_removed
        );
        if self.unterminated > 0 {
            let _ = writeln!(
                out,
                "⚠️  Unterminated console.log statements: {}",
                self.unterminated
            );
        }

        if self.removed == 0 {
            let _ = writeln!(out, "ℹ️  No console.log statements found to remove.");
        } else {
            let _ = writeln!(
                out,
                "🎉 Successfully removed {} console.log statement(s) from {}",
                self.removed, self.file
            );
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
