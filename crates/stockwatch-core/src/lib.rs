//! # stockwatch-core: Pure Business Logic for Stockwatch
//!
//! This crate is the **heart** of Stockwatch, a convenience store inventory
//! tracker. It contains the domain types, the per-product stock metrics and
//! the end-of-day report engine, all as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockwatch Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal App (apps/terminal)                   │   │
//! │  │   Menu ──► Products ──► Sales ──► Status ──► Report ──► Config  │   │
//! │  │   Session: Inventory + SalesRecord + SystemConfig               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut [Product], &SalesRecord, &Config │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockwatch-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  metrics  │  │  report   │  │ validation│  │   │
//! │  │   │  Product  │  │  ratios   │  │  sections │  │   rules   │  │   │
//! │  │   │  Sales    │  │  expiry   │  │  ranking  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO PERSISTENCE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SalesRecord, SystemConfig, Inventory)
//! - [`money`] - Money type with integer arithmetic
//! - [`metrics`] - Stock ratio, expiry, efficiency and turnover per product
//! - [`report`] - The six-section daily report
//! - [`error`] - Domain error types
//! - [`validation`] - Operator input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use stockwatch_core::{Category, Money, Product};
//!
//! let milk = Product::new("Milk", Money::from_units(1000), Category::Food, 10, 2);
//!
//! // 2 / 10 = 0.2, at or below a 30% threshold
//! assert!(milk.is_stock_low(0.3));
//! assert_eq!(milk.optimal_stock - milk.current_stock, 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod metrics;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::{generate_report, DailyReport};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products listed in the bestseller section.
pub const BESTSELLER_LIMIT: usize = 5;

/// Stock above `optimal × EXCESS_STOCK_FACTOR` is reported as excess.
pub const EXCESS_STOCK_FACTOR: f64 = 1.5;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Highest shelf price accepted, in whole currency units.
pub const MAX_PRICE_UNITS: i64 = 100_000_000;

/// Highest optimal or current stock level accepted on entry.
pub const MAX_STOCK_LEVEL: i64 = 1_000_000;

/// Highest total units of one product that can be sold in a day.
///
/// With the price and stock limits this keeps every revenue, value and
/// turnover figure well inside `i64`.
pub const MAX_DAILY_SALES: i64 = 1_000_000;

/// Maximum units accepted in a single sale entry.
///
/// Catches typos such as an extra zero; larger sales can be entered in parts.
pub const MAX_SALE_QUANTITY: i64 = 9_999;
