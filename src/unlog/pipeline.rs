//! File pipeline
//!
//! Reads a file, runs the scanner over it, writes a backup and then the cleaned text,
//! and returns the statistics for the report.
//!
//! Write order
//!
//!     The backup is written before the input is overwritten. If writing the backup fails
//!     the input is still untouched. A failure after the backup was written leaves the
//!     backup in place; nothing is rolled back.

use crate::unlog::config::{FilesConfig, UnlogConfig};
use crate::unlog::counting::count_occurrences;
use crate::unlog::error::CleanError;
use crate::unlog::report::Report;
use crate::unlog::scanning::clean_with;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of the advisory extension check. Processing goes ahead either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionCheck {
    Recognized,
    Unrecognized { extension: Option<String> },
}

impl ExtensionCheck {
    pub fn is_recognized(&self) -> bool {
        matches!(self, ExtensionCheck::Recognized)
    }
}

pub fn check_extension(path: &Path, files: &FilesConfig) -> ExtensionCheck {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    let recognized = extension.as_deref().is_some_and(|ext| {
        files
            .extensions
            .iter()
            .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
    });

    if recognized {
        ExtensionCheck::Recognized
    } else {
        ExtensionCheck::Unrecognized { extension }
    }
}

/// `<path><suffix>`, keeping the original extension: `app.js` -> `app.js.backup`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Clean `path` in place.
pub fn process_file<P: AsRef<Path>>(path: P, config: &UnlogConfig) -> Result<Report, CleanError> {
    let path = path.as_ref();
    let file = path.display().to_string();

    if !path.exists() {
        return Err(CleanError::FileNotFound(file));
    }

    let content = fs::read_to_string(path)?;
    tracing::debug!(file = %file, bytes = content.len(), "read source");

    let found = count_occurrences(&content);
    let outcome = clean_with(&content, &config.scan);
    let remaining = count_occurrences(&outcome.text);

    let backup = backup_path(path, &config.files.backup_suffix);
    fs::write(&backup, &content)?;
    tracing::debug!(backup = %backup.display(), "backup written");

    fs::write(path, &outcome.text)?;
    tracing::debug!(file = %file, bytes = outcome.text.len(), "cleaned source written");

    if found != remaining + outcome.removed_count() {
        tracing::debug!(
            found,
            remaining,
            scanner_removed = outcome.removed_count(),
            "pattern count and scanner count disagree"
        );
    }

    Ok(Report::new(
        file,
        backup.display().to_string(),
        found,
        remaining,
        outcome.removed_count(),
        outcome.unterminated_count(),
    ))
}
