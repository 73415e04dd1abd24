//! # Stats Module
//!
//! Headcount summary shown at the top of the admin list.
//!
//! ## Counting Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  per RSVP: person_count = 1 + guests (infants counted)                 │
//! │                                                                         │
//! │  TwoNights ─────────┐                                                  │
//! │  OneNight ──────────┤                                                  │
//! │  FridayOnly ────────┼──► own counter  +  total_people                  │
//! │  PayFullWeekend ────┘                                                  │
//! │                                                                         │
//! │  WantsButCannot ────┐                                                  │
//! │  NotComing ─────────┴──► own counter only                              │
//! │                                                                         │
//! │  unrecognized value ───► `unrecognized` only (not in `total`)          │
//! │                                                                         │
//! │  total = number of RSVP records with a known answer                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{AttendanceChoice, RecordedAttendance, StoredRsvp};

/// Counters derived from the stored RSVPs. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStats {
    /// RSVP records (not people) with a recognized answer.
    pub total: usize,
    pub two_nights: usize,
    pub one_night: usize,
    pub friday_only: usize,
    pub paid_weekend: usize,
    pub wants_but_cannot: usize,
    pub not_coming: usize,
    /// People in the four attending categories.
    pub total_people: usize,
    /// Records whose attendance value is not a known option.
    pub unrecognized: usize,
}

impl RsvpStats {
    /// Headcount for one category.
    pub fn headcount(&self, choice: AttendanceChoice) -> usize {
        match choice {
            AttendanceChoice::TwoNights => self.two_nights,
            AttendanceChoice::OneNight => self.one_night,
            AttendanceChoice::FridayOnly => self.friday_only,
            AttendanceChoice::PayFullWeekendUndecidedDuration => self.paid_weekend,
            AttendanceChoice::WantsButCannot => self.wants_but_cannot,
            AttendanceChoice::NotComing => self.not_coming,
        }
    }

    fn bucket_mut(&mut self, choice: AttendanceChoice) -> &mut usize {
        match choice {
            AttendanceChoice::TwoNights => &mut self.two_nights,
            AttendanceChoice::OneNight => &mut self.one_night,
            AttendanceChoice::FridayOnly => &mut self.friday_only,
            AttendanceChoice::PayFullWeekendUndecidedDuration => &mut self.paid_weekend,
            AttendanceChoice::WantsButCannot => &mut self.wants_but_cannot,
            AttendanceChoice::NotComing => &mut self.not_coming,
        }
    }

    /// Adds one stored RSVP to the counters.
    pub fn record(&mut self, rsvp: &StoredRsvp) {
        let choice = match &rsvp.attendance {
            RecordedAttendance::Known(choice) => *choice,
            RecordedAttendance::Unrecognized(raw) => {
                tracing::warn!(
                    id = %rsvp.id,
                    attendance = %raw,
                    "RSVP has an unrecognized attendance value, left out of the stats"
                );
                self.unrecognized += 1;
                return;
            }
        };

        let people = rsvp.person_count();
        self.total += 1;
        *self.bucket_mut(choice) += people;
        if choice.is_attending() {
            self.total_people += people;
        }
    }
}

/// Tallies headcounts over all stored RSVPs.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use kampeer_core::{compute_stats, AttendanceChoice, Guest, RsvpSubmission, StoredRsvp};
///
/// let rsvp = RsvpSubmission::new("Bo", "bo@example.nl", AttendanceChoice::OneNight)
///     .with_guest(Guest::infant("Mees"))
///     .unwrap();
/// let stored = StoredRsvp::from_submission("doc-1", rsvp, Utc::now()).unwrap();
///
/// let stats = compute_stats(&[stored]);
/// assert_eq!(stats.total, 1);
/// assert_eq!(stats.one_night, 2);
/// assert_eq!(stats.total_people, 2);
/// ```
pub fn compute_stats(rsvps: &[StoredRsvp]) -> RsvpStats {
    rsvps.iter().fold(RsvpStats::default(), |mut stats, rsvp| {
        stats.record(rsvp);
        stats
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
