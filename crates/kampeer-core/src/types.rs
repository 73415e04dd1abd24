//! # Domain Types
//!
//! Core domain types shared by validation, pricing and stats.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ RsvpSubmission  │   │   StoredRsvp    │   │     Guest       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  id (server)    │   │  name           │       │
//! │  │  email          │──►│  submission     │   │  email?         │       │
//! │  │  attendance?    │   │  fields         │   │  is_infant      │       │
//! │  │  guests (0..10) │   │  created_at     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────────────┐   ┌─────────────────────────────────┐     │
//! │  │    AttendanceChoice     │   │       RecordedAttendance        │     │
//! │  │  TwoNights   OneNight   │   │  Known(AttendanceChoice)        │     │
//! │  │  FridayOnly  PayFull... │   │  Unrecognized(raw string)       │     │
//! │  │  WantsButCannot  Not... │   └─────────────────────────────────┘     │
//! │  └─────────────────────────┘                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A submission is built once from the form fields and then only read.
//! Nothing in this crate keeps a submission between calls.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::MAX_GUESTS;

// =============================================================================
// Attendance Choice
// =============================================================================

/// The six mutually exclusive RSVP answers.
///
/// Wire values are the form option slugs, so the `aanwezigheid` value the
/// web form stores parses as-is. Only the option values match; the form's
/// field names are mapped by whoever exports the documents.
///
/// ## Night Mapping
/// ```text
/// ┌──────────────────────────────────┬──────────────┬──────────────┐
/// │ Choice                           │ Billed nights│ Attending    │
/// ├──────────────────────────────────┼──────────────┼──────────────┤
/// │ TwoNights                        │ 2            │ yes          │
/// │ OneNight                         │ 1            │ yes          │
/// │ FridayOnly                       │ 0            │ yes          │
/// │ PayFullWeekendUndecidedDuration  │ 2 (maximum)  │ yes          │
/// │ WantsButCannot                   │ not billed   │ no           │
/// │ NotComing                        │ not billed   │ no           │
/// └──────────────────────────────────┴──────────────┴──────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AttendanceChoice {
    /// Camping Friday and Saturday night.
    #[serde(rename = "2-nachten")]
    TwoNights,
    /// Camping one night.
    #[serde(rename = "1-nacht")]
    OneNight,
    /// Only the Friday evening potluck, no overnight stay.
    #[serde(rename = "alleen-vrijdag")]
    FridayOnly,
    /// Pays for the whole weekend, duration not decided yet.
    #[serde(rename = "betaal-heel-weekend")]
    PayFullWeekendUndecidedDuration,
    /// Would like to come but cannot make it.
    #[serde(rename = "wil-graag-maar-kan-niet")]
    WantsButCannot,
    /// Not coming this year.
    #[serde(rename = "niet")]
    NotComing,
}

impl AttendanceChoice {
    /// All choices in form order.
    pub const ALL: [AttendanceChoice; 6] = [
        AttendanceChoice::TwoNights,
        AttendanceChoice::OneNight,
        AttendanceChoice::FridayOnly,
        AttendanceChoice::PayFullWeekendUndecidedDuration,
        AttendanceChoice::WantsButCannot,
        AttendanceChoice::NotComing,
    ];

    /// The form option value (`2-nachten`, `niet`, ...).
    pub const fn slug(&self) -> &'static str {
        match self {
            AttendanceChoice::TwoNights => "2-nachten",
            AttendanceChoice::OneNight => "1-nacht",
            AttendanceChoice::FridayOnly => "alleen-vrijdag",
            AttendanceChoice::PayFullWeekendUndecidedDuration => "betaal-heel-weekend",
            AttendanceChoice::WantsButCannot => "wil-graag-maar-kan-niet",
            AttendanceChoice::NotComing => "niet",
        }
    }

    /// Dutch label used in the admin list.
    pub const fn label(&self) -> &'static str {
        match self {
            AttendanceChoice::TwoNights => "2 nachten",
            AttendanceChoice::OneNight => "1 nacht",
            AttendanceChoice::FridayOnly => "Alleen vrijdag",
            AttendanceChoice::PayFullWeekendUndecidedDuration => "Betaal heel weekend",
            AttendanceChoice::WantsButCannot => "Wil komen maar kan niet",
            AttendanceChoice::NotComing => "Niet dit jaar",
        }
    }

    /// Number of nights billed, or `None` when this answer costs nothing.
    ///
    /// `PayFullWeekendUndecidedDuration` is billed for the full two nights.
    pub const fn billable_nights(&self) -> Option<u32> {
        match self {
            AttendanceChoice::TwoNights => Some(2),
            AttendanceChoice::OneNight => Some(1),
            AttendanceChoice::FridayOnly => Some(0),
            AttendanceChoice::PayFullWeekendUndecidedDuration => Some(2),
            AttendanceChoice::WantsButCannot => None,
            AttendanceChoice::NotComing => None,
        }
    }

    /// Returns true if this person shows up at the event in some form.
    pub const fn is_attending(&self) -> bool {
        match self {
            AttendanceChoice::TwoNights
            | AttendanceChoice::OneNight
            | AttendanceChoice::FridayOnly
            | AttendanceChoice::PayFullWeekendUndecidedDuration => true,
            AttendanceChoice::WantsButCannot | AttendanceChoice::NotComing => false,
        }
    }
}

impl fmt::Display for AttendanceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AttendanceChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttendanceChoice::ALL
            .into_iter()
            .find(|choice| choice.slug() == s.trim())
            .ok_or_else(|| CoreError::UnknownAttendance(s.to_string()))
    }
}

// =============================================================================
// Guest
// =============================================================================

/// An extra person on an RSVP, beyond the primary registrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Display name (required, checked by validation).
    pub name: String,

    /// Optional contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,

    /// Children under two: free lodging, still pay tourist tax.
    #[serde(default)]
    pub is_infant: bool,
}

impl Guest {
    /// Creates an adult guest without email.
    pub fn new(name: impl Into<String>) -> Self {
        Guest {
            name: name.into(),
            email: None,
            is_infant: false,
        }
    }

    /// Creates an infant guest.
    pub fn infant(name: impl Into<String>) -> Self {
        Guest {
            is_infant: true,
            ..Guest::new(name)
        }
    }

    /// Sets the optional email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns the email only if it contains something besides whitespace.
    pub fn provided_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.trim().is_empty())
    }
}

// =============================================================================
// RSVP Submission
// =============================================================================

/// One RSVP as entered in the form, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSubmission {
    /// Primary registrant name.
    pub name: String,

    /// Primary registrant email.
    pub email: String,

    /// `None` while the visitor has not picked an option yet.
    #[serde(default, deserialize_with = "deserialize_selection")]
    pub attendance: Option<AttendanceChoice>,

    /// Extra persons, in display order.
    #[serde(default)]
    pub guests: Vec<Guest>,
}

impl RsvpSubmission {
    /// Creates a submission with an attendance choice and no guests.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        attendance: AttendanceChoice,
    ) -> Self {
        RsvpSubmission {
            name: name.into(),
            email: email.into(),
            attendance: Some(attendance),
            guests: Vec::new(),
        }
    }

    /// Creates a submission where no attendance option is selected yet.
    pub fn unselected(name: impl Into<String>, email: impl Into<String>) -> Self {
        RsvpSubmission {
            name: name.into(),
            email: email.into(),
            attendance: None,
            guests: Vec::new(),
        }
    }

    /// Appends a guest, refusing to go beyond [`MAX_GUESTS`].
    ///
    /// ## Example
    /// ```rust
    /// use kampeer_core::{AttendanceChoice, CoreError, Guest, RsvpSubmission, MAX_GUESTS};
    ///
    /// let mut rsvp = RsvpSubmission::new("Jip", "jip@example.nl", AttendanceChoice::OneNight);
    /// for i in 0..MAX_GUESTS {
    ///     rsvp = rsvp.with_guest(Guest::new(format!("Gast {i}"))).unwrap();
    /// }
    /// assert_eq!(
    ///     rsvp.with_guest(Guest::new("Eén te veel")).unwrap_err(),
    ///     CoreError::GuestLimitReached { max: MAX_GUESTS }
    /// );
    /// ```
    pub fn with_guest(mut self, guest: Guest) -> CoreResult<Self> {
        if self.guests.len() >= MAX_GUESTS {
            return Err(CoreError::GuestLimitReached { max: MAX_GUESTS });
        }
        self.guests.push(guest);
        Ok(self)
    }

    /// Primary registrant plus every guest, infants included.
    pub fn headcount(&self) -> usize {
        1 + self.guests.len()
    }
}

/// Treats `null`, a missing field and `""` as "nothing selected".
fn deserialize_selection<'de, D>(deserializer: D) -> Result<Option<AttendanceChoice>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// =============================================================================
// Recorded Attendance
// =============================================================================

/// Attendance as found in a stored document.
///
/// Stored records may come from older or foreign clients, so an unknown
/// value is kept verbatim instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordedAttendance {
    /// One of the six known answers.
    Known(AttendanceChoice),
    /// Anything else, exactly as stored.
    Unrecognized(String),
}

impl RecordedAttendance {
    /// Returns the known choice, if any.
    pub fn choice(&self) -> Option<AttendanceChoice> {
        match self {
            RecordedAttendance::Known(choice) => Some(*choice),
            RecordedAttendance::Unrecognized(_) => None,
        }
    }

    /// The stored string value.
    pub fn as_str(&self) -> &str {
        match self {
            RecordedAttendance::Known(choice) => choice.slug(),
            RecordedAttendance::Unrecognized(raw) => raw,
        }
    }
}

impl From<AttendanceChoice> for RecordedAttendance {
    fn from(choice: AttendanceChoice) -> Self {
        RecordedAttendance::Known(choice)
    }
}

impl From<&str> for RecordedAttendance {
    fn from(raw: &str) -> Self {
        raw.parse()
            .map(RecordedAttendance::Known)
            .unwrap_or_else(|_| RecordedAttendance::Unrecognized(raw.to_string()))
    }
}

impl Serialize for RecordedAttendance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordedAttendance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RecordedAttendance::from(raw.as_str()))
    }
}

// =============================================================================
// Stored RSVP
// =============================================================================

/// An RSVP as returned by the persistence layer. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoredRsvp {
    /// Server-assigned document id.
    pub id: String,

    pub name: String,

    pub email: String,

    #[ts(as = "String")]
    pub attendance: RecordedAttendance,

    #[serde(default)]
    pub guests: Vec<Guest>,

    /// When the RSVP was received. `None` when the stored timestamp is
    /// missing, empty or not RFC 3339.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Missing, `null`, `""` and unparseable timestamps all load as `None`, so
/// one damaged record does not sink a whole export.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw.as_deref().map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => Ok(Some(at.with_timezone(&Utc))),
        Err(err) => {
            tracing::warn!(timestamp = %raw, error = %err, "Ignoring unparseable RSVP timestamp");
            Ok(None)
        }
    }
}

impl StoredRsvp {
    /// Freezes a submission into a stored record.
    ///
    /// Fails with [`CoreError::AttendanceNotSelected`] when the visitor never
    /// picked an option; such a submission cannot pass validation either.
    pub fn from_submission(
        id: impl Into<String>,
        submission: RsvpSubmission,
        created_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        let choice = submission
            .attendance
            .ok_or(CoreError::AttendanceNotSelected)?;

        Ok(StoredRsvp {
            id: id.into(),
            name: submission.name,
            email: submission.email,
            attendance: RecordedAttendance::Known(choice),
            guests: submission.guests,
            created_at: Some(created_at),
        })
    }

    /// Primary registrant plus all guests, infants included.
    pub fn person_count(&self) -> usize {
        1 + self.guests.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
