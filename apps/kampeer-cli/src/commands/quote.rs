//! # Quote Command
//!
//! Validates a submission and, when it passes, prints its price breakdown.
//!
//! ## Flow
//! ```text
//! submission.json ──► validate() ──► invalid? ──► errors, exit 1
//!                                       │
//!                                       ▼
//!                              Tariffs::quote()
//!                                       │
//!                          ┌────────────┴────────────┐
//!                          ▼                         ▼
//!                   PriceBreakdown              None: "Geen kosten"
//! ```

use std::path::Path;

use kampeer_core::{
    validate, AttendanceChoice, PriceBreakdown, RsvpSubmission, Tariffs, ValidationResult,
};
use serde::Serialize;
use tracing::info;

use super::{read_json, validate as validate_cmd, Report};
use crate::config::AppConfig;
use crate::error::CliResult;

/// `--json` payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput {
    pub validation: ValidationResult,
    /// Nights the price is based on; absent when nothing is billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_nights: Option<u32>,
    /// Absent when invalid or when the choice costs nothing.
    pub price: Option<PriceBreakdown>,
    #[serde(skip)]
    attendance: Option<AttendanceChoice>,
}

pub fn run(path: &Path, config: &AppConfig) -> CliResult<Report> {
    let submission: RsvpSubmission = read_json(path)?;
    let output = quote(&submission, &config.tariffs);

    if let Some(price) = &output.price {
        info!(total_cents = price.total_price.cents(), "Submission quoted");
    }

    let text = render(&output, &config.event_title());
    Report::new(output.validation.valid, text, &output)
}

/// Prices only what passes validation.
pub fn quote(submission: &RsvpSubmission, tariffs: &Tariffs) -> QuoteOutput {
    let validation = validate(submission);
    let price = if validation.valid {
        tariffs.quote(submission)
    } else {
        None
    };
    let billed_nights = price
        .as_ref()
        .and(submission.attendance)
        .and_then(|choice| choice.billable_nights());

    QuoteOutput {
        validation,
        billed_nights,
        price,
        attendance: submission.attendance,
    }
}

pub fn render(output: &QuoteOutput, title: &str) -> String {
    if !output.validation.valid {
        return validate_cmd::render(&output.validation);
    }

    let Some(price) = &output.price else {
        return format!("{title}\n\nGeen kosten voor deze aanwezigheidsoptie.");
    };

    let mut lines = vec![title.to_string(), String::new()];
    for line in &price.lines {
        lines.push(format!("{:<32}{:>10}", line.label, line.amount.to_string()));
        if let Some(details) = &line.details {
            lines.push(format!("  {details}"));
        }
    }
    lines.push("-".repeat(42));
    lines.push(format!("{:<32}{:>10}", "Totaal", price.total_price.to_string()));
    lines.push(String::new());
    if let (Some(AttendanceChoice::PayFullWeekendUndecidedDuration), Some(nights)) =
        (output.attendance, output.billed_nights)
    {
        lines.push(format!(
            "Betaal heel weekend: berekend als {nights} nachten, ongeacht hoe lang je blijft."
        ));
    }
    lines.push(price.explanation.clone());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kampeer_core::{AttendanceChoice, Guest};

    #[test]
    fn test_invalid_submission_is_not_priced() {
        let submission = RsvpSubmission::new("", "bo@example.nl", AttendanceChoice::TwoNights);
        let output = quote(&submission, &Tariffs::default());

        assert!(!output.validation.valid);
        assert!(output.price.is_none());
        assert_eq!(render(&output, "Kamp"), "- Naam is verplicht");
    }

    #[test]
    fn test_not_coming_has_no_costs() {
        let submission = RsvpSubmission::new("Bo", "bo@example.nl", AttendanceChoice::NotComing);
        let output = quote(&submission, &Tariffs::default());

        assert!(output.validation.valid);
        assert!(output.price.is_none());
        assert_eq!(
            render(&output, "Kamp"),
            "Kamp\n\nGeen kosten voor deze aanwezigheidsoptie."
        );
    }

    #[test]
    fn test_render_breakdown() {
        let submission = RsvpSubmission::new("Bo", "bo@example.nl", AttendanceChoice::OneNight)
            .with_guest(Guest::infant("Mees"))
            .unwrap();
        let output = quote(&submission, &Tariffs::default());
        let text = render(&output, "Kamp");

        assert!(text.starts_with("Kamp\n\nBijdrage algemene kosten"));
        assert!(text.contains("  2 x €4.36 (huur materiaal, elektra, etc.)"));
        assert!(text.contains("Overnachting (1 nacht)"));
        assert!(text.contains("  1 persoon x €8.85 x 1"));
        assert!(text.contains("  2 persoon x €1.33 x 1"));
        // 872 + 885 + 266
        assert!(text.contains("€20.23"));
        assert!(text.ends_with("toeristenbelasting."));
    }

    #[test]
    fn test_json_payload() {
        let submission = RsvpSubmission::new("Bo", "bo@example.nl", AttendanceChoice::FridayOnly);
        let output = quote(&submission, &Tariffs::default());
        let report = Report::new(true, String::new(), &output).unwrap();

        assert_eq!(report.json["validation"]["valid"], true);
        assert_eq!(report.json["billedNights"], 0);
        assert_eq!(report.json["price"]["totalPrice"], 436);
    }

    #[test]
    fn test_full_weekend_states_billed_nights() {
        let submission = RsvpSubmission::new(
            "Bo",
            "bo@example.nl",
            AttendanceChoice::PayFullWeekendUndecidedDuration,
        );
        let output = quote(&submission, &Tariffs::default());
        assert_eq!(output.billed_nights, Some(2));

        let text = render(&output, "Kamp");
        assert!(text.contains("Betaal heel weekend: berekend als 2 nachten"));

        let two_nights = RsvpSubmission::new("Bo", "bo@example.nl", AttendanceChoice::TwoNights);
        let text = render(&quote(&two_nights, &Tariffs::default()), "Kamp");
        assert!(!text.contains("Betaal heel weekend"));
    }
}
