//! # Validate Command
//!
//! Runs the form rules over one submission document.

use std::path::Path;

use kampeer_core::{validate, RsvpSubmission, ValidationResult};
use tracing::info;

use super::{read_json, Report};
use crate::error::CliResult;

pub fn run(path: &Path) -> CliResult<Report> {
    let submission: RsvpSubmission = read_json(path)?;
    let result = validate(&submission);
    info!(valid = result.valid, errors = result.errors.len(), "Submission validated");

    Report::new(result.valid, render(&result), &result)
}

/// `OK`, or one error message per line.
pub fn render(result: &ValidationResult) -> String {
    if result.valid {
        return "OK: de aanmelding is geldig.".to_string();
    }

    result
        .errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}
