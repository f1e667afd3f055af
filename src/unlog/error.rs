use std::fmt;

/// Errors that can occur while cleaning a file
#[derive(Debug, Clone, PartialEq)]
pub enum CleanError {
    MissingArgument,
    FileNotFound(String),
    Io(String),
    Config(String),
}

impl std::error::Error for CleanError {}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::MissingArgument => write!(f, "no file specified"),
            CleanError::FileNotFound(path) => write!(f, "File '{}' not found.", path),
            CleanError::Io(msg) => write!(f, "could not process file: {}", msg),
            CleanError::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        CleanError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for CleanError {
    fn from(err: config::ConfigError) -> Self {
        CleanError::Config(err.to_string())
    }
}
