//! # Error Types
//!
//! Domain-specific error types for stockwatch-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockwatch-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Operator input validation failures             │
//! │                                                                         │
//! │  terminal app errors (separate crate)                                  │
//! │  └── AppError         - I/O, configuration, wrapped CoreError          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → operator message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The report metrics themselves never fail: missing sales, missing discount
//! entries and zero denominators all have defined results. These errors only
//! cover input and session preconditions.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product name is not registered.
    ///
    /// ## When This Occurs
    /// - Recording a sale for a name that was never added
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No product is registered yet.
    ///
    /// ## When This Occurs
    /// - Requesting a report with an empty product list
    /// - Recording sales before any product was added
    #[error("No products registered: add at least one product first")]
    EmptyInventory,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// The shell shows the message and asks again.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number, not a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
