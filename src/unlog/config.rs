//! Configuration loading.
//!
//! `defaults/unlog.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. On top of it, [`load_for_input`] layers an
//! `unlog.toml` found next to the file being cleaned and then an explicitly requested
//! file, before deserializing into [`UnlogConfig`].

use crate::unlog::scanning::ScanOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/unlog.default.toml");

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG: &str = "unlog.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct UnlogConfig {
    pub files: FilesConfig,
    pub scan: ScanOptions,
}

/// Knobs for the file pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Recognised source extensions, without the leading dot.
    pub extensions: Vec<String>,
    pub backup_suffix: String,
}

/// Layers TOML sources over the embedded defaults; later sources win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a configuration file, skipping it when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn build(self) -> Result<UnlogConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<UnlogConfig, ConfigError> {
    Loader::new().build()
}

/// Configuration for cleaning `input`: defaults, then [`LOCAL_CONFIG`] from the input's
/// directory if present, then `explicit`, which must exist.
pub fn load_for_input(input: &Path, explicit: Option<&Path>) -> Result<UnlogConfig, ConfigError> {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    let mut loader = Loader::new().with_optional_file(dir.join(LOCAL_CONFIG));
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }
    loader.build()
}
