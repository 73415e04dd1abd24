//! # CLI Commands Module
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Report, JSON input)
//! ├── validate.rs  ◄─── Form rules for one submission
//! ├── quote.rs     ◄─── Validation + price breakdown
//! ├── stats.rs     ◄─── Admin summary and roster
//! └── config.rs    ◄─── Effective configuration
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  kampeer quote rsvp.json                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  read_json::<RsvpSubmission>(path)   ◄── only I/O in a command          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  kampeer-core (pure)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Report { success, text, json }                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  lib::run() prints text or JSON, maps success to the exit code          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod quote;
pub mod stats;
pub mod validate;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// False when the input was rejected (e.g. an invalid RSVP).
    pub success: bool,
    pub text: String,
    pub json: serde_json::Value,
}

impl Report {
    /// Builds a report, serializing `payload` for `--json` output.
    pub fn new<T: Serialize>(success: bool, text: String, payload: &T) -> CliResult<Self> {
        Ok(Report {
            success,
            text,
            json: serde_json::to_value(payload)?,
        })
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> CliResult<String> {
        match format {
            OutputFormat::Text => Ok(self.text.clone()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.json)?),
        }
    }
}

/// Reads and parses a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    debug!(?path, "Reading input document");

    let contents = std::fs::read_to_string(path).map_err(|source| CliError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CliError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}
