//! # Pricing Module
//!
//! Turns an attendance choice and guest list into an itemized price.
//!
//! ## Breakdown Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Price Breakdown                                    │
//! │                                                                         │
//! │  Bijdrage algemene kosten   (always)                                    │
//! │    everyone (infants too) × shared cost share                           │
//! │                                                                         │
//! │  Overnachting               (nights > 0)                                │
//! │    main person + non-infant guests × lodging rate × nights              │
//! │                                                                         │
//! │  Toeristenbelasting         (nights > 0)                                │
//! │    everyone (infants too) × tourist tax × nights                        │
//! │  ───────────────────────────────────────────────                        │
//! │  total = sum of the lines above, to the cent                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `NotComing`, `WantsButCannot` and an unselected choice have no price at
//! all: [`calculate_price`] returns `None` for them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::RsvpSubmission;

/// Shown under every breakdown.
pub const PRICE_EXPLANATION: &str = "De prijs is opgebouwd uit een vaste bijdrage voor de \
algemene kosten (huur tent, elektra, schoonmaak) plus de kosten voor overnachting en \
toeristenbelasting.";

/// Highest accepted rate: €10,000. Keeps every line of any quote far from
/// the `i64` limit.
pub const MAX_TARIFF_CENTS: i64 = 1_000_000;

// =============================================================================
// Tariffs
// =============================================================================

/// The three rates a price is built from.
///
/// Defaults are the 2025 rates of the camping ground plus the communal
/// costs (€326.76) spread over 75 visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct Tariffs {
    /// Per person, independent of nights. Covers tent hire, power, cleaning.
    pub shared_cost_per_person: Money,

    /// Per paying adult per night. Infants stay free.
    pub lodging_per_night: Money,

    /// Per person per night, infants included.
    pub tourist_tax_per_night: Money,
}

impl Default for Tariffs {
    fn default() -> Self {
        Tariffs {
            shared_cost_per_person: Money::from_cents(436),
            lodging_per_night: Money::from_cents(885),
            tourist_tax_per_night: Money::from_cents(133),
        }
    }
}

impl Tariffs {
    /// Rejects negative rates and rates above [`MAX_TARIFF_CENTS`].
    pub fn validate(&self) -> CoreResult<()> {
        let rates = [
            ("shared_cost_per_person", self.shared_cost_per_person),
            ("lodging_per_night", self.lodging_per_night),
            ("tourist_tax_per_night", self.tourist_tax_per_night),
        ];

        for (name, rate) in rates {
            if rate.is_negative() {
                return Err(CoreError::NegativeTariff {
                    name,
                    cents: rate.cents(),
                });
            }
            if rate.cents() > MAX_TARIFF_CENTS {
                return Err(CoreError::TariffTooHigh {
                    name,
                    cents: rate.cents(),
                    max: MAX_TARIFF_CENTS,
                });
            }
        }

        Ok(())
    }

    /// Prices a submission with these rates.
    ///
    /// Returns `None` when the attendance choice carries no cost. The
    /// submission should have passed [`crate::validate`] first; pricing
    /// itself never fails.
    ///
    /// ## Example
    /// ```rust
    /// use kampeer_core::{AttendanceChoice, Guest, RsvpSubmission, Tariffs};
    ///
    /// let tariffs = Tariffs::default();
    /// let rsvp = RsvpSubmission::new("Bo", "bo@example.nl", AttendanceChoice::FridayOnly)
    ///     .with_guest(Guest::new("Kai"))
    ///     .unwrap();
    ///
    /// let breakdown = tariffs.quote(&rsvp).unwrap();
    /// assert_eq!(breakdown.lines.len(), 1);
    /// assert_eq!(breakdown.total_price.cents(), 2 * 436);
    /// ```
    pub fn quote(&self, submission: &RsvpSubmission) -> Option<PriceBreakdown> {
        let choice = submission.attendance?;
        let nights = choice.billable_nights()?;

        let headcount = count(submission.guests.len() + 1);
        let paying_adults = count(1 + submission.guests.iter().filter(|g| !g.is_infant).count());

        let mut lines = vec![self.shared_cost_line(headcount)];
        if nights > 0 {
            lines.push(self.lodging_line(paying_adults, nights));
            lines.push(self.tourist_tax_line(headcount, nights));
        }

        let breakdown = PriceBreakdown::from_lines(lines);
        tracing::debug!(
            attendance = %choice,
            nights,
            headcount,
            total_cents = breakdown.total_price.cents(),
            "RSVP priced"
        );
        Some(breakdown)
    }

    fn shared_cost_line(&self, headcount: u32) -> PriceLine {
        PriceLine {
            label: "Bijdrage algemene kosten".to_string(),
            amount: self.shared_cost_per_person * headcount,
            details: Some(format!(
                "{} x {} (huur materiaal, elektra, etc.)",
                headcount, self.shared_cost_per_person
            )),
        }
    }

    fn lodging_line(&self, paying_adults: u32, nights: u32) -> PriceLine {
        let unit = if nights == 1 { "nacht" } else { "nachten" };
        PriceLine {
            label: format!("Overnachting ({nights} {unit})"),
            amount: self.lodging_per_night * paying_adults * nights,
            details: Some(format!(
                "{} persoon x {} x {}",
                paying_adults, self.lodging_per_night, nights
            )),
        }
    }

    fn tourist_tax_line(&self, paying_tax: u32, nights: u32) -> PriceLine {
        PriceLine {
            label: "Toeristenbelasting".to_string(),
            amount: self.tourist_tax_per_night * paying_tax * nights,
            details: Some(format!(
                "{} persoon x {} x {}",
                paying_tax, self.tourist_tax_per_night, nights
            )),
        }
    }
}

/// Guest lists are tiny; saturate rather than wrap if a caller passes
/// something absurd.
fn count(people: usize) -> u32 {
    u32::try_from(people).unwrap_or(u32::MAX)
}

// =============================================================================
// Breakdown Types
// =============================================================================

/// One row of a price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceLine {
    pub label: String,
    pub amount: Money,
    /// The multiplication behind `amount`, for the visitor to check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub details: Option<String>,
}

/// Itemized price for one RSVP.
///
/// ## Invariant
/// `total_price` is exactly the sum of `lines[i].amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub total_price: Money,
    pub lines: Vec<PriceLine>,
    pub explanation: String,
}

impl PriceBreakdown {
    /// Builds a breakdown whose total is the sum of `lines`.
    pub fn from_lines(lines: Vec<PriceLine>) -> Self {
        PriceBreakdown {
            total_price: lines.iter().map(|line| line.amount).sum(),
            lines,
            explanation: PRICE_EXPLANATION.to_string(),
        }
    }
}

/// Prices a submission with the default tariffs.
///
/// See [`Tariffs::quote`].
pub fn calculate_price(submission: &RsvpSubmission) -> Option<PriceBreakdown> {
    Tariffs::default().quote(submission)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttendanceChoice, Guest};

    const R_F: i64 = 436;
    const R_L: i64 = 885;
    const R_T: i64 = 133;

    fn rsvp(choice: AttendanceChoice, guests: Vec<Guest>) -> RsvpSubmission {
        RsvpSubmission {
            name: "Sanne".to_string(),
            email: "sanne@example.nl".to_string(),
            attendance: Some(choice),
            guests,
        }
    }

    fn assert_total_is_sum(breakdown: &PriceBreakdown) {
        let sum: Money = breakdown.lines.iter().map(|l| l.amount).sum();
        assert_eq!(breakdown.total_price, sum);
    }

    #[test]
    fn test_no_price_for_absent_or_declined() {
        let guests = vec![Guest::new("Kai"), Guest::infant("Mees")];

        assert!(calculate_price(&rsvp(AttendanceChoice::NotComing, guests.clone())).is_none());
        assert!(calculate_price(&rsvp(AttendanceChoice::WantsButCannot, guests.clone())).is_none());

        let mut unselected = rsvp(AttendanceChoice::TwoNights, guests);
        unselected.attendance = None;
        assert!(calculate_price(&unselected).is_none());
    }

    #[test]
    fn test_two_nights_alone() {
        let breakdown = calculate_price(&rsvp(AttendanceChoice::TwoNights, vec![])).unwrap();

        assert_eq!(breakdown.total_price.cents(), R_F + 2 * R_L + 2 * R_T);
        assert_eq!(breakdown.lines.len(), 3);
        assert_eq!(breakdown.lines[0].label, "Bijdrage algemene kosten");
        assert_eq!(breakdown.lines[1].label, "Overnachting (2 nachten)");
        assert_eq!(breakdown.lines[2].label, "Toeristenbelasting");
        assert_eq!(breakdown.explanation, PRICE_EXPLANATION);
        assert_total_is_sum(&breakdown);
    }

    #[test]
    fn test_infant_pays_tax_but_not_lodging() {
        let breakdown =
            calculate_price(&rsvp(AttendanceChoice::TwoNights, vec![Guest::infant("Mees")]))
                .unwrap();

        let [fixed, lodging, tax] = breakdown.lines.as_slice() else {
            panic!("expected three lines, got {:?}", breakdown.lines);
        };

        assert_eq!(fixed.amount.cents(), 2 * R_F);
        assert_eq!(
            fixed.details.as_deref(),
            Some("2 x €4.36 (huur materiaal, elektra, etc.)")
        );

        assert_eq!(lodging.amount.cents(), R_L * 2);
        assert_eq!(lodging.details.as_deref(), Some("1 persoon x €8.85 x 2"));

        assert_eq!(tax.amount.cents(), 2 * R_T * 2);
        assert_eq!(tax.details.as_deref(), Some("2 persoon x €1.33 x 2"));

        assert_total_is_sum(&breakdown);
    }

    #[test]
    fn test_one_night_label_is_singular() {
        let breakdown = calculate_price(&rsvp(AttendanceChoice::OneNight, vec![Guest::new("Kai")]))
            .unwrap();

        assert_eq!(breakdown.lines[1].label, "Overnachting (1 nacht)");
        assert_eq!(
            breakdown.total_price.cents(),
            2 * R_F + 2 * R_L + 2 * R_T
        );
    }

    #[test]
    fn test_friday_only_has_fixed_line_only() {
        let guests = vec![Guest::new("Kai"), Guest::infant("Mees"), Guest::new("Lot")];
        let breakdown = calculate_price(&rsvp(AttendanceChoice::FridayOnly, guests)).unwrap();

        assert_eq!(breakdown.lines.len(), 1);
        assert_eq!(breakdown.total_price.cents(), 4 * R_F);
        assert_total_is_sum(&breakdown);
    }

    #[test]
    fn test_undecided_weekend_billed_as_two_nights() {
        let guests = vec![Guest::new("Kai")];
        let undecided =
            calculate_price(&rsvp(AttendanceChoice::PayFullWeekendUndecidedDuration, guests.clone()))
                .unwrap();
        let two_nights = calculate_price(&rsvp(AttendanceChoice::TwoNights, guests)).unwrap();

        assert_eq!(undecided, two_nights);
    }

    #[test]
    fn test_full_guest_list() {
        let mut guests: Vec<Guest> = (0..7).map(|i| Guest::new(format!("Gast {i}"))).collect();
        guests.extend((0..3).map(|i| Guest::infant(format!("Baby {i}"))));

        let breakdown = calculate_price(&rsvp(AttendanceChoice::TwoNights, guests)).unwrap();

        // 11 people, 8 paying lodging
        assert_eq!(breakdown.lines[0].amount.cents(), 11 * R_F);
        assert_eq!(breakdown.lines[1].amount.cents(), 8 * R_L * 2);
        assert_eq!(breakdown.lines[2].amount.cents(), 11 * R_T * 2);
        assert_total_is_sum(&breakdown);
    }

    #[test]
    fn test_quote_is_idempotent() {
        let submission = rsvp(
            AttendanceChoice::OneNight,
            vec![Guest::infant("Mees"), Guest::new("Kai")],
        );
        assert_eq!(calculate_price(&submission), calculate_price(&submission));
    }

    #[test]
    fn test_custom_tariffs() {
        let tariffs = Tariffs {
            shared_cost_per_person: Money::from_cents(500),
            lodging_per_night: Money::from_cents(1000),
            tourist_tax_per_night: Money::zero(),
        };
        let breakdown = tariffs
            .quote(&rsvp(AttendanceChoice::TwoNights, vec![]))
            .unwrap();

        assert_eq!(breakdown.total_price.cents(), 500 + 2000);
        assert_eq!(breakdown.lines.len(), 3);
        assert!(breakdown.lines[2].amount.is_zero());
    }

    #[test]
    fn test_tariff_validation() {
        assert!(Tariffs::default().validate().is_ok());

        let tariffs = Tariffs {
            lodging_per_night: Money::from_cents(-1),
            ..Tariffs::default()
        };
        assert_eq!(
            tariffs.validate(),
            Err(CoreError::NegativeTariff {
                name: "lodging_per_night",
                cents: -1
            })
        );
    }

    #[test]
    fn test_tariff_ceiling() {
        let at_ceiling = Tariffs {
            tourist_tax_per_night: Money::from_cents(MAX_TARIFF_CENTS),
            ..Tariffs::default()
        };
        assert!(at_ceiling.validate().is_ok());

        let huge = Tariffs {
            lodging_per_night: Money::from_cents(i64::MAX / 2),
            ..Tariffs::default()
        };
        assert_eq!(
            huge.validate(),
            Err(CoreError::TariffTooHigh {
                name: "lodging_per_night",
                cents: i64::MAX / 2,
                max: MAX_TARIFF_CENTS,
            })
        );

        // Unvalidated rates still price without panicking.
        let breakdown = huge
            .quote(&rsvp(AttendanceChoice::TwoNights, vec![Guest::new("Kai")]))
            .unwrap();
        assert_eq!(breakdown.total_price.cents(), i64::MAX);
        assert_total_is_sum(&breakdown);
    }

    #[test]
    fn test_breakdown_json_shape() {
        let breakdown = calculate_price(&rsvp(AttendanceChoice::FridayOnly, vec![])).unwrap();
        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["totalPrice"], 436);
        assert_eq!(json["lines"][0]["amount"], 436);
        assert_eq!(json["lines"][0]["label"], "Bijdrage algemene kosten");
    }
}
