//! # Roster Module
//!
//! Rows for the admin RSVP list: newest first, with display labels.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Guest, RecordedAttendance, StoredRsvp};

/// One row of the admin list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Dutch label, or the raw stored value if it is not a known option.
    pub attendance: String,
    /// `-`, or `name (email), name, ...`.
    pub guests: String,
    /// `None` when the stored record has no usable timestamp.
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&StoredRsvp> for RosterEntry {
    fn from(rsvp: &StoredRsvp) -> Self {
        RosterEntry {
            id: rsvp.id.clone(),
            name: rsvp.name.clone(),
            email: rsvp.email.clone(),
            attendance: attendance_label(&rsvp.attendance).to_string(),
            guests: summarize_guests(&rsvp.guests),
            created_at: rsvp.created_at,
        }
    }
}

fn attendance_label(attendance: &RecordedAttendance) -> &str {
    match attendance {
        RecordedAttendance::Known(choice) => choice.label(),
        RecordedAttendance::Unrecognized(raw) => raw,
    }
}

/// Joins guests as `name (email)`, or returns `-` for an empty list.
pub fn summarize_guests(guests: &[Guest]) -> String {
    if guests.is_empty() {
        return "-".to_string();
    }

    guests
        .iter()
        .map(|guest| match guest.provided_email() {
            Some(email) => format!("{} ({})", guest.name, email),
            None => guest.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the admin list, newest RSVP first.
///
/// Records without a timestamp go last. Equal timestamps keep their input
/// order.
pub fn roster(rsvps: &[StoredRsvp]) -> Vec<RosterEntry> {
    let mut entries: Vec<RosterEntry> = rsvps.iter().map(RosterEntry::from).collect();
    entries.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttendanceChoice;
    use chrono::TimeZone;

    fn stored(id: &str, attendance: &str, day: u32, guests: Vec<Guest>) -> StoredRsvp {
        StoredRsvp {
            id: id.to_string(),
            name: format!("Naam {id}"),
            email: format!("{id}@example.nl"),
            attendance: RecordedAttendance::from(attendance),
            guests,
            created_at: Some(Utc.with_ymd_and_hms(2026, 6, day, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_newest_first() {
        let rsvps = vec![
            stored("old", "niet", 1, vec![]),
            stored("new", "2-nachten", 20, vec![]),
            stored("mid", "1-nacht", 10, vec![]),
        ];

        let ids: Vec<String> = roster(&rsvps).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_undated_records_go_last() {
        let mut undated = stored("undated", "2-nachten", 1, vec![]);
        undated.created_at = None;
        let rsvps = vec![
            undated,
            stored("old", "niet", 1, vec![]),
            stored("new", "1-nacht", 20, vec![]),
        ];

        let entries = roster(&rsvps);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
        assert_eq!(entries[2].created_at, None);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let rsvps = vec![
            stored("first", "niet", 5, vec![]),
            stored("second", "niet", 5, vec![]),
        ];

        let ids: Vec<String> = roster(&rsvps).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_labels() {
        let entry = RosterEntry::from(&stored("a", "betaal-heel-weekend", 1, vec![]));
        assert_eq!(
            entry.attendance,
            AttendanceChoice::PayFullWeekendUndecidedDuration.label()
        );

        let entry = RosterEntry::from(&stored("b", "misschien", 1, vec![]));
        assert_eq!(entry.attendance, "misschien");
    }

    #[test]
    fn test_guest_summary() {
        assert_eq!(summarize_guests(&[]), "-");

        let guests = vec![
            Guest::new("Kai").with_email("kai@example.nl"),
            Guest::infant("Mees"),
            Guest::new("Lot").with_email(" "),
        ];
        assert_eq!(summarize_guests(&guests), "Kai (kai@example.nl), Mees, Lot");
    }
}
