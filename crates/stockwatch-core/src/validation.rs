//! # Validation Module
//!
//! Operator input validation for Stockwatch.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt (terminal app)                                        │
//! │  ├── Parse text into numbers / dates                                   │
//! │  └── Re-prompt on parse failure                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rules (non-negative prices, positive quantities, ...)    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain types (Inventory, SalesRecord, SystemConfig)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockwatch_core::validation::{validate_product_name, validate_sale_quantity};
//!
//! assert!(validate_product_name("Banana Milk").is_ok());
//! assert!(validate_sale_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{
    MAX_DAILY_SALES, MAX_PRICE_UNITS, MAX_PRODUCT_NAME_LEN, MAX_SALE_QUANTITY, MAX_STOCK_LEVEL,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 100 characters
///
/// Names are case-sensitive identities, so no normalization is done here.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in whole currency units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_PRICE_UNITS
pub fn validate_price(units: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_UNITS).contains(&units) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_UNITS,
        });
    }

    Ok(())
}

/// Validates an entered stock level (optimal or current).
///
/// Stock only goes negative through overselling, never by entry.
pub fn validate_stock_level(field: &str, units: i64) -> ValidationResult<()> {
    if !(0..=MAX_STOCK_LEVEL).contains(&units) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_STOCK_LEVEL,
        });
    }

    Ok(())
}

/// Validates a quantity sold.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_SALE_QUANTITY
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_SALE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_SALE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a sale entry against what was already sold today.
///
/// The entry must pass [`validate_sale_quantity`] and the day's running
/// total for the product must stay within MAX_DAILY_SALES.
pub fn validate_sale_entry(already_sold: i64, qty: i64) -> ValidationResult<()> {
    validate_sale_quantity(qty)?;

    if already_sold.saturating_add(qty) > MAX_DAILY_SALES {
        return Err(ValidationError::OutOfRange {
            field: "units sold today".to_string(),
            min: 1,
            max: MAX_DAILY_SALES,
        });
    }

    Ok(())
}

/// Validates a stock threshold given in percent and returns the fraction.
///
/// ## Example
/// ```rust
/// use stockwatch_core::validation::validate_threshold_percent;
///
/// assert_eq!(validate_threshold_percent(25.0).unwrap(), 0.25);
/// assert!(validate_threshold_percent(120.0).is_err());
/// ```
pub fn validate_threshold_percent(percent: f64) -> ValidationResult<f64> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "stock threshold".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(percent / 100.0)
}

/// Validates the expiry warning window in days.
pub fn validate_warning_days(days: i64) -> ValidationResult<()> {
    if days < 0 {
        return Err(ValidationError::OutOfRange {
            field: "expiry warning days".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
