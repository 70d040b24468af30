//! # Product Metrics
//!
//! Derived figures for a single product, used by every report section.
//!
//! ## Metric Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Metric               Formula                        Zero case          │
//! │  ──────────────────   ────────────────────────────   ───────────────    │
//! │  stock_ratio          current / optimal × 100        optimal = 0 → 0.0  │
//! │  is_stock_low         current / optimal <= t         optimal = 0 → no   │
//! │  days_until_expiry    expiry - today (days)          no date → None     │
//! │  is_expiring_soon     0 <= days <= warning           no date → no       │
//! │  sales_efficiency     sold / (current + sold) × 100  total = 0 → 0.0    │
//! │  stock_turnover       sold / avg(initial, now) × 100 avg = 0 → 0 or ∞   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is clamped: negative stock flows through every formula.
//!
//! `sales_efficiency` and `stock_turnover` expect the product as it was
//! *before* today's sales were taken off the shelf, so that
//! `current + sold` is the stock the day started with.

use chrono::NaiveDate;

use crate::types::Product;

impl Product {
    /// Current stock as a percentage of optimal stock.
    ///
    /// ## Example
    /// ```rust
    /// use stockwatch_core::{Category, Money, Product};
    ///
    /// let p = Product::new("Cola", Money::from_units(1200), Category::Beverage, 20, 25);
    /// assert_eq!(p.stock_ratio(), 125.0);
    /// ```
    pub fn stock_ratio(&self) -> f64 {
        if self.optimal_stock == 0 {
            return 0.0;
        }
        self.current_stock as f64 / self.optimal_stock as f64 * 100.0
    }

    /// Reporting-grade low-stock check: `current / optimal <= threshold`.
    ///
    /// Every report section uses this inclusive form. The inventory status
    /// listing uses the strict [`Product::is_below_threshold`].
    pub fn is_stock_low(&self, threshold: f64) -> bool {
        if self.optimal_stock == 0 {
            return false;
        }
        self.current_stock as f64 / self.optimal_stock as f64 <= threshold
    }

    /// Whole days from `today` until the expiry date; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry_date
            .map(|expiry| expiry.signed_duration_since(today).num_days())
    }

    /// True when the product expires within `warning_days`, today included.
    /// Already-expired products are not "expiring soon".
    pub fn is_expiring_soon(&self, warning_days: i64, today: NaiveDate) -> bool {
        matches!(
            self.days_until_expiry(today),
            Some(days) if (0..=warning_days).contains(&days)
        )
    }

    /// Share of the day's available units that were sold, in percent.
    pub fn sales_efficiency(&self, sold: i64) -> f64 {
        let available = self.current_stock.saturating_add(sold);
        if available == 0 {
            return 0.0;
        }
        sold as f64 / available as f64 * 100.0
    }

    /// Units sold relative to average stock over the day, in percent.
    ///
    /// Average stock is the mean of the starting stock (`current + sold`)
    /// and `current`. With zero average stock the turnover is infinite if
    /// anything sold, otherwise zero.
    pub fn stock_turnover(&self, sold: i64) -> f64 {
        let initial_stock = self.current_stock.saturating_add(sold);
        let average_stock = (initial_stock as f64 + self.current_stock as f64) / 2.0;
        if average_stock == 0.0 {
            return if sold > 0 { f64::INFINITY } else { 0.0 };
        }
        sold as f64 / average_stock * 100.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
