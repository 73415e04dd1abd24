//! # kampeer-core: Pure Business Logic for the Camping Invite
//!
//! This crate holds the rules behind the RSVP form and the admin summary
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Kampeer Invite Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Web UI (TypeScript, out of scope)               │   │
//! │  │    Event info ──► RSVP form ──► Price preview ──► Admin list    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ts-rs bindings                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kampeer-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation│  │  pricing  │  │   stats   │  │  roster   │  │   │
//! │  │   │  errors   │  │ Tariffs   │  │ RsvpStats │  │ newest    │  │   │
//! │  │   │  messages │  │ Breakdown │  │ headcount │  │ first     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  kampeer-cli (apps/kampeer-cli)                 │   │
//! │  │           config, logging, JSON documents on disk               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (AttendanceChoice, Guest, RsvpSubmission, StoredRsvp)
//! - [`money`] - Money type with integer euro cents (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Form validation with Dutch user-facing messages
//! - [`pricing`] - Itemized price breakdown per RSVP
//! - [`stats`] - Headcount summary for the admin view
//! - [`roster`] - Admin list ordering and display rows
//!
//! ## Example Usage
//!
//! ```rust
//! use kampeer_core::{calculate_price, validate, AttendanceChoice, Guest, RsvpSubmission};
//!
//! let submission = RsvpSubmission::new("Sanne", "sanne@example.nl", AttendanceChoice::TwoNights)
//!     .with_guest(Guest::infant("Mees"))
//!     .unwrap();
//!
//! assert!(validate(&submission).valid);
//!
//! let breakdown = calculate_price(&submission).unwrap();
//! // 2 × €4.36 + 1 × €8.85 × 2 + 2 × €1.33 × 2
//! assert_eq!(breakdown.total_price.cents(), 872 + 1770 + 532);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod roster;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{calculate_price, PriceBreakdown, PriceLine, Tariffs};
pub use roster::{roster, RosterEntry};
pub use stats::{compute_stats, RsvpStats};
pub use types::*;
pub use validation::{validate, validate_field, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of extra persons on a single RSVP.
///
/// ## Business Reason
/// The form stops offering the "add person" button at this size. It is
/// enforced by [`RsvpSubmission::with_guest`], never by [`validate`].
pub const MAX_GUESTS: usize = 10;
