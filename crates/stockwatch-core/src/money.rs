//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices in the store are whole won: there is no minor unit.            │
//! │                                                                         │
//! │  Revenue  = price × quantity          (exact, integer)                  │
//! │  Value    = price × current stock     (exact, integer, may be < 0)      │
//! │  Discount = price × (1 - rate)        (float, rounded half away from 0) │
//! │                                                                         │
//! │  Only the discount step touches floating point, and it is rounded      │
//! │  straight back to whole units.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockwatch_core::money::Money;
//!
//! let price = Money::from_units(1500);
//! let revenue = price.multiply_quantity(3);
//! assert_eq!(revenue.units(), 4500);
//! assert_eq!(revenue.to_string(), "₩4500");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Inventory value goes negative when stock is oversold
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity, saturating at the `i64` range.
    ///
    /// ## Example
    /// ```rust
    /// use stockwatch_core::money::Money;
    ///
    /// let unit_price = Money::from_units(1200);
    /// assert_eq!(unit_price.multiply_quantity(4).units(), 4800);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Applies a fractional discount and returns the discounted price.
    ///
    /// The result is `self × (1 - rate)` rounded half away from zero to
    /// the nearest whole unit.
    ///
    /// ## Example
    /// ```rust
    /// use stockwatch_core::money::Money;
    ///
    /// let price = Money::from_units(1000);
    /// assert_eq!(price.apply_discount_rate(0.3).units(), 700);
    /// assert_eq!(Money::from_units(1500).apply_discount_rate(0.7).units(), 450);
    /// ```
    pub fn apply_discount_rate(&self, rate: f64) -> Money {
        let discounted = self.0 as f64 * (1.0 - rate);
        Money(discounted.round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `₩<units>`, e.g. `₩1500` or `-₩300`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₩{}", sign, self.0.unsigned_abs())
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(1099);
        assert_eq!(money.units(), 1099);
        assert_eq!(Money::zero(), Money::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(1500)), "₩1500");
        assert_eq!(format!("{}", Money::from_units(0)), "₩0");
        assert_eq!(format!("{}", Money::from_units(-300)), "-₩300");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!(a.multiply_quantity(3).units(), 3000);

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total.units(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, -50].into_iter().map(Money::from_units).sum();
        assert_eq!(total.units(), 300);
    }

    #[test]
    fn test_discount_rounds_half_away_from_zero() {
        // 1250 × 0.5 = 625 exactly
        assert_eq!(Money::from_units(1250).apply_discount_rate(0.5).units(), 625);
        // 1001 × 0.5 = 500.5 → 501
        assert_eq!(Money::from_units(1001).apply_discount_rate(0.5).units(), 501);
        // 999 × 0.3 off = 699.3 → 699
        assert_eq!(Money::from_units(999).apply_discount_rate(0.3).units(), 699);
    }

    #[test]
    fn test_zero_discount_keeps_price() {
        assert_eq!(Money::from_units(1800).apply_discount_rate(0.0).units(), 1800);
    }

    #[test]
    fn test_negative_value() {
        let value = Money::from_units(1000).multiply_quantity(-2);
        assert_eq!(value.units(), -2000);
        assert_eq!(value.to_string(), "-₩2000");
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_units(i64::MAX);
        assert_eq!(huge.multiply_quantity(2).units(), i64::MAX);
        assert_eq!(huge.multiply_quantity(-2).units(), i64::MIN);
        assert_eq!((huge + Money::from_units(1)).units(), i64::MAX);

        let mut total = huge;
        total += huge;
        assert_eq!(total.units(), i64::MAX);
    }
}
