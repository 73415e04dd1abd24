//! # Error Types
//!
//! Domain-specific error types for kampeer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kampeer-core errors (this file)                                       │
//! │  ├── CoreError        - API misuse (guest limit, unset attendance)     │
//! │  └── ValidationError  - One failed form rule, shown to the visitor     │
//! │                                                                         │
//! │  kampeer-cli errors (app crate)                                        │
//! │  └── CliError         - Config, file and JSON failures                 │
//! │                                                                         │
//! │  Validation problems are DATA, never `Err`: see validation::validate   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `ValidationError` Display strings are the exact Dutch form messages
//! 3. Errors are enum variants, never String

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These never come out of validation, pricing or stats. They signal that a
/// caller tried to build a value the domain does not allow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Adding one more guest would exceed the per-RSVP limit.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Persoon toevoegen" (10 already listed)
    ///      │
    ///      ▼
    /// with_guest() ──► GuestLimitReached { max: 10 }
    ///      │
    ///      ▼
    /// UI keeps the button disabled
    /// ```
    #[error("An RSVP cannot have more than {max} extra persons")]
    GuestLimitReached { max: usize },

    /// A submission without an attendance choice was handed to storage.
    #[error("Attendance must be selected before an RSVP can be stored")]
    AttendanceNotSelected,

    /// A string is not one of the attendance option slugs.
    #[error("Unknown attendance option: '{0}'")]
    UnknownAttendance(String),

    /// A configured tariff is negative.
    #[error("Tariff {name} must not be negative, got {cents} cents")]
    NegativeTariff { name: &'static str, cents: i64 },

    /// A configured tariff is above the accepted ceiling.
    #[error("Tariff {name} must be at most {max} cents, got {cents} cents")]
    TariffTooHigh {
        name: &'static str,
        cents: i64,
        max: i64,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single failed validation rule.
///
/// The `Display` output is the message shown next to the form, so the
/// strings here are part of the user-facing contract.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    /// Primary registrant name is empty.
    #[error("Naam is verplicht")]
    NameRequired,

    /// Primary registrant email is empty.
    #[error("Email is verplicht")]
    EmailRequired,

    /// Primary registrant email does not look like `local@domain.tld`.
    #[error("Ongeldig emailadres")]
    EmailInvalid,

    /// No attendance option was chosen.
    #[error("Kies een aanwezigheidsoptie")]
    AttendanceRequired,

    /// Extra person at 1-based `position` has no name.
    #[error("Extra persoon {position}: naam is verplicht")]
    GuestNameRequired { position: usize },

    /// Extra person at 1-based `position` has a malformed email.
    #[error("Extra persoon {position}: ongeldig emailadres")]
    GuestEmailInvalid { position: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::GuestLimitReached { max: 10 };
        assert_eq!(
            err.to_string(),
            "An RSVP cannot have more than 10 extra persons"
        );

        let err = CoreError::NegativeTariff {
            name: "lodging_per_night",
            cents: -1,
        };
        assert_eq!(
            err.to_string(),
            "Tariff lodging_per_night must not be negative, got -1 cents"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::NameRequired.to_string(), "Naam is verplicht");
        assert_eq!(ValidationError::EmailRequired.to_string(), "Email is verplicht");
        assert_eq!(ValidationError::EmailInvalid.to_string(), "Ongeldig emailadres");
        assert_eq!(
            ValidationError::AttendanceRequired.to_string(),
            "Kies een aanwezigheidsoptie"
        );
        assert_eq!(
            ValidationError::GuestNameRequired { position: 3 }.to_string(),
            "Extra persoon 3: naam is verplicht"
        );
        assert_eq!(
            ValidationError::GuestEmailInvalid { position: 1 }.to_string(),
            "Extra persoon 1: ongeldig emailadres"
        );
    }

    #[test]
    fn test_validation_error_serializes_with_kind_tag() {
        let json = serde_json::to_string(&ValidationError::GuestNameRequired { position: 2 })
            .unwrap();
        assert_eq!(json, r#"{"kind":"guestNameRequired","position":2}"#);
    }
}
