//! # Validation Module
//!
//! RSVP form validation with the Dutch messages shown to visitors.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: On blur (web form)                                           │
//! │  └── validate_field(): one field, one message                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: On submit                                                    │
//! │  └── validate(): every rule, every message, in form order              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing                                                      │
//! │  └── only runs for submissions that passed layer 2                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Violations are collected, never short-circuited, and never returned as
//! `Err`: an invalid RSVP is an ordinary outcome.
//!
//! ## Usage
//! ```rust
//! use kampeer_core::{validate, validate_field, RsvpSubmission};
//!
//! let result = validate(&RsvpSubmission::unselected("", "not-an-email"));
//! assert!(!result.valid);
//! assert_eq!(
//!     result.errors,
//!     vec!["Naam is verplicht", "Ongeldig emailadres", "Kies een aanwezigheidsoptie"]
//! );
//!
//! assert_eq!(validate_field("email", ""), "Email is verplicht");
//! assert_eq!(validate_field("email", "a@b.nl"), "");
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{AttendanceChoice, Guest, RsvpSubmission};

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot in the domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// =============================================================================
// Result Type
// =============================================================================

/// Outcome of validating a whole submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// Messages in rule order.
    pub errors: Vec<String>,
}

impl From<Vec<ValidationError>> for ValidationResult {
    fn from(errors: Vec<ValidationError>) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

// =============================================================================
// Primitive Checks
// =============================================================================

/// True if the value contains something besides whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True if the trimmed value looks like an email address.
///
/// ## Example
/// ```rust
/// use kampeer_core::validation::is_valid_email;
///
/// assert!(is_valid_email("sanne@example.nl"));
/// assert!(is_valid_email("  sanne@example.nl  "));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a b@example.nl"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

// =============================================================================
// Submission Validation
// =============================================================================

/// Checks a submission and returns every violated rule as a typed error.
///
/// ## Rule Order
/// 1. name
/// 2. email (required, then format; never both)
/// 3. attendance
/// 4. each guest: name, then email if one was given
///
/// The number of guests is not checked here; [`crate::MAX_GUESTS`] is a
/// form-building limit.
pub fn check_submission(submission: &RsvpSubmission) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(check_name(&submission.name));
    errors.extend(check_email(&submission.email));

    if submission.attendance.is_none() {
        errors.push(ValidationError::AttendanceRequired);
    }

    for (index, guest) in submission.guests.iter().enumerate() {
        errors.extend(check_guest(guest, index + 1));
    }

    errors
}

/// Validates a submission, returning messages ready for display.
pub fn validate(submission: &RsvpSubmission) -> ValidationResult {
    let result = ValidationResult::from(check_submission(submission));
    if !result.valid {
        tracing::debug!(errors = result.errors.len(), "RSVP submission rejected");
    }
    result
}

fn check_name(name: &str) -> Option<ValidationError> {
    (!is_present(name)).then_some(ValidationError::NameRequired)
}

fn check_email(email: &str) -> Option<ValidationError> {
    if !is_present(email) {
        Some(ValidationError::EmailRequired)
    } else if !is_valid_email(email) {
        Some(ValidationError::EmailInvalid)
    } else {
        None
    }
}

fn check_attendance(value: &str) -> Option<ValidationError> {
    AttendanceChoice::from_str(value)
        .is_err()
        .then_some(ValidationError::AttendanceRequired)
}

/// Checks one extra person; `position` is 1-based.
fn check_guest(guest: &Guest, position: usize) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !is_present(&guest.name) {
        errors.push(ValidationError::GuestNameRequired { position });
    }

    if let Some(email) = guest.provided_email() {
        if !is_valid_email(email) {
            errors.push(ValidationError::GuestEmailInvalid { position });
        }
    }

    errors
}

// =============================================================================
// Single-Field Validation
// =============================================================================

/// The form fields that have on-blur feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Attendance,
}

impl FormField {
    /// Resolves a form input name; accepts the Dutch and English names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "naam" | "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "aanwezigheid" | "attendance" => Some(FormField::Attendance),
            _ => None,
        }
    }

    /// Applies this field's rule to a raw input value.
    pub fn check(&self, value: &str) -> Option<ValidationError> {
        match self {
            FormField::Name => check_name(value),
            FormField::Email => check_email(value),
            FormField::Attendance => check_attendance(value),
        }
    }
}

/// Validates one field for incremental feedback.
///
/// Returns the error message, or an empty string when the value is fine or
/// the field has no rule.
pub fn validate_field(field_name: &str, value: &str) -> String {
    FormField::from_name(field_name)
        .and_then(|field| field.check(value))
        .map(|err| err.to_string())
        .unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
