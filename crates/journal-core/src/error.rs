//! Error types for journal-core
//!
//! The store itself never fails: unknown ids are ignored and dangling
//! references simply drop out of derived views. Errors come from the
//! edges, i.e. configuration, snapshot import and boundary validation.

use thiserror::Error;

/// Result type alias for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;

/// Main error type for journal operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A library snapshot could not be read or written
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Input rejected at the boundary before reaching the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML or JSON source could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The cover palette has no colors
    #[error("Cover palette must contain at least one color")]
    EmptyPalette,

    /// A palette entry is not a usable CSS color
    #[error("Invalid cover color: {0:?}")]
    InvalidColor(String),

    /// A date or label pattern cannot be rendered
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Snapshot(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
