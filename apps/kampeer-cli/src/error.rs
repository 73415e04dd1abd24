//! # CLI Error Type
//!
//! Everything that can go wrong outside the pure core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  config file ──► ConfigRead / ConfigParse / InvalidConfig               │
//! │  input file  ──► InputRead / InputParse                                 │
//! │  core misuse ──► Core(CoreError)                                        │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  main(): error! log + message on stderr + exit code 2                   │
//! │                                                                         │
//! │  An INVALID RSVP is not an error: it is a report with success = false  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use kampeer_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::AppConfig`].
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config parsed but breaks a rule.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input document could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input document is not the expected JSON shape.
    #[error("Failed to parse {}: {source}", .path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output serialization failed.
    #[error("Failed to render output: {0}")]
    Render(String),

    /// Core business rule violation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Render(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Render(err.to_string())
    }
}
