//! # Money Module
//!
//! Provides the `Money` type for euro amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    3 × 4.36 = 13.080000000000002  ❌ WRONG!                             │
//! │                                                                         │
//! │  A price breakdown must add up to the cent:                             │
//! │    total == fixed + lodging + tourist tax                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 436 cents = 1308 cents, exactly                                  │
//! │    Every tariff is a whole number of cents, so no rounding ever happens │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kampeer_core::money::Money;
//!
//! let lodging = Money::from_cents(885); // €8.85
//! let two_nights = lodging * 2;         // €17.70
//! assert_eq!(two_nights.to_string(), "€17.70");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in euro cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Same representation as every other amount in the
///   system; negative values never come out of pricing
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as plain cents**: the UI divides by 100 for display
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from euro cents.
    ///
    /// ## Example
    /// ```rust
    /// use kampeer_core::money::Money;
    ///
    /// let share = Money::from_cents(436); // €4.36
    /// assert_eq!(share.cents(), 436);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole euros and cents.
    ///
    /// ## Example
    /// ```rust
    /// use kampeer_core::money::Money;
    ///
    /// assert_eq!(Money::from_euros_cents(8, 85).cents(), 885);
    /// ```
    #[inline]
    pub const fn from_euros_cents(euros: i64, cents: i64) -> Self {
        if euros < 0 {
            Money(euros * 100 - cents)
        } else {
            Money(euros * 100 + cents)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-euro portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cent portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a per-unit rate by a count of people or nights.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use kampeer_core::money::Money;
    ///
    /// let tax = Money::from_cents(133);
    /// // 3 people × 2 nights
    /// assert_eq!(tax.times(3).times(2).cents(), 798);
    /// ```
    #[inline]
    pub const fn times(&self, count: u32) -> Self {
        Money(self.0.saturating_mul(count as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as `€12.34`, the notation the price lines use in their details.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        self.times(count)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
