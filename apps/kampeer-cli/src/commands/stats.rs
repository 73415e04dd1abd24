//! # Stats Command
//!
//! Admin view over an export of stored RSVPs: headcounts per option and the
//! full list, newest first.

use std::path::Path;

use kampeer_core::{compute_stats, roster, RosterEntry, RsvpStats, StoredRsvp};
use serde::Serialize;
use tracing::info;

use super::{read_json, Report};
use crate::config::AppConfig;
use crate::error::CliResult;

const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

/// `--json` payload.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    pub stats: RsvpStats,
    pub roster: Vec<RosterEntry>,
}

pub fn run(path: &Path, config: &AppConfig) -> CliResult<Report> {
    let rsvps: Vec<StoredRsvp> = read_json(path)?;
    let output = summarize(&rsvps);
    info!(
        records = rsvps.len(),
        total_people = output.stats.total_people,
        "RSVP export summarized"
    );

    let text = render(&output, &config.event_title());
    Report::new(true, text, &output)
}

pub fn summarize(rsvps: &[StoredRsvp]) -> StatsOutput {
    StatsOutput {
        stats: compute_stats(rsvps),
        roster: roster(rsvps),
    }
}

pub fn render(output: &StatsOutput, title: &str) -> String {
    let stats = &output.stats;
    let mut lines = vec![title.to_string(), String::new()];

    let counters = [
        ("Totaal RSVPs", stats.total),
        ("2 nachten", stats.two_nights),
        ("1 nacht", stats.one_night),
        ("Alleen vrijdag", stats.friday_only),
        ("Betaal heel weekend", stats.paid_weekend),
        ("Wil komen maar kan niet", stats.wants_but_cannot),
        ("Kan niet komen", stats.not_coming),
        ("Totaal personen", stats.total_people),
    ];
    for (label, value) in counters {
        lines.push(format!("{label:<26}{value:>5}"));
    }
    if stats.unrecognized > 0 {
        lines.push(format!(
            "{:<26}{:>5}",
            "Onbekende aanwezigheid", stats.unrecognized
        ));
    }

    lines.push(String::new());
    if output.roster.is_empty() {
        lines.push("Nog geen RSVPs ontvangen.".to_string());
    } else {
        lines.extend(output.roster.iter().map(render_entry));
    }

    lines.join("\n")
}

fn render_entry(entry: &RosterEntry) -> String {
    let received = entry
        .created_at
        .map_or_else(|| "-".to_string(), |at| at.format(DATE_FORMAT).to_string());

    format!(
        "{:<16}  {} <{}>  {}  gasten: {}",
        received,
        entry.name,
        entry.email,
        entry.attendance,
        entry.guests
    )
}
