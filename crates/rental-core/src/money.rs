//! # Money Module
//!
//! Provides the `Money` type for handling rental prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    60.0 × 1.2 × 3 = 215.99999999999997  ❌ WRONG!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    6000 cents + 20% = 7200 cents                                        │
//! │    7200 cents × 3 days = 21600 cents = $216.00 exactly                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let base = Money::from_cents(6000); // $60.00
//! let weekend = base.apply_markup(2000); // +20%
//! assert_eq!(weekend.cents(), 7200);
//!
//! let parsed: Money = "60.5".parse().unwrap();
//! assert_eq!(parsed.cents(), 6050);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps when comparing prices
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON export
///
/// ## Where Money is Used
/// ```text
/// Car.base_price ──► update_price(day) ──► Car.current_price
///                                               │
///                                               ▼
///                          calculate_price(days) ──► Rental.total_price
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds a percentage markup and returns the marked-up amount.
    ///
    /// ## Arguments
    /// * `markup_bps` - Markup in basis points (2000 = 20%)
    ///
    /// The markup itself is rounded half up to the nearest cent:
    /// `(amount × bps + 5000) / 10000`. The result saturates at the `i64`
    /// bounds instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let base = Money::from_cents(6999); // $69.99
    /// // 69.99 × 20% = 13.998 → 14.00
    /// assert_eq!(base.apply_markup(2000).cents(), 8399);
    /// ```
    pub fn apply_markup(&self, markup_bps: u32) -> Money {
        // i128 keeps large amounts from overflowing mid-calculation
        let markup = (self.0 as i128 * markup_bps as i128 + 5000) / 10000;
        let total = (self.0 as i128 + markup).clamp(i64::MIN as i128, i64::MAX as i128);
        Money::from_cents(total as i64)
    }

    /// Multiplies a daily rate by a number of days.
    ///
    /// Zero days yields zero; no positivity check happens here. Saturates
    /// at `i64::MAX` cents instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let per_day = Money::from_cents(7200);
    /// assert_eq!(per_day.multiply_days(3).cents(), 21600);
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: u32) -> Self {
        Money(self.0.saturating_mul(days as i64))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal amount such as `"60"`, `"60.5"`, `"60.00"` or `"$60.00"`.
///
/// At most two fractional digits are accepted; anything finer would need
/// sub-cent rounding, which we refuse rather than guess.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("must be a number"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("must be a number"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most 2 decimal places"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount too large"))?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("must be a number"))? * 10,
            _ => frac.parse().map_err(|_| invalid("must be a number"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$12.34`.
///
/// The menu uses `ConfigState::format_currency` instead so the currency
/// symbol can be configured.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: u32) -> Self {
        self.multiply_days(days)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
