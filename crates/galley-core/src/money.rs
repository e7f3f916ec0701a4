//! # Money Module
//!
//! Integer-cent money for purchase orders and invoices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SUPPLIER ORDER MATH                                                    │
//! │                                                                         │
//! │  12 × flour 25kg @ $18.45   →  1845 × 12  = 22140 cents                │
//! │   3 × olive oil 5L @ $41.99 →  4199 × 3   = 12597 cents                │
//! │                                 ─────────────────────                   │
//! │                                 34737 cents = $347.37                   │
//! │                                                                         │
//! │  No float drift: the order total always equals the sum of its lines.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use galley_core::money::Money;
//!
//! let unit_price = Money::from_cents(1845);
//! let line = unit_price.multiply_quantity(12);
//! assert_eq!(line.cents(), 22140);
//! assert_eq!(line.to_string(), "$221.40");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so credit notes and refunds can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use galley_core::money::Money;
    ///
    /// let case_of_lemons = Money::from_cents(2450);
    /// assert_eq!(case_of_lemons.multiply_quantity(4).cents(), 9800);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates tax on this amount, rounding half up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, computed in i128 so
    /// large invoice totals cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use galley_core::money::Money;
    /// use galley_core::types::TaxRate;
    ///
    /// let catering = Money::from_cents(125_000); // $1,250.00
    /// let tax = catering.calculate_tax(TaxRate::from_bps(875)); // 8.75%
    /// assert_eq!(tax.cents(), 10_938);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns this amount after a percentage discount given in basis
    /// points (1000 = 10%).
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let discount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount as i64)
    }
}

/// Renders as `$1,234.56`-style text without the thousands separator.
///
/// Display only; the frontend does localised formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Summing line totals into an order or invoice total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
