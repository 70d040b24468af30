//! # App Error Type
//!
//! Unified error type for the terminal application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockwatch                             │
//! │                                                                         │
//! │  Command Function -> AppResult<()>                                      │
//! │         │                                                               │
//! │         ├── Core error? ──────► printed as "Error: ..." , back to menu │
//! │         │                                                               │
//! │         ├── Input closed? ────► session ends normally                  │
//! │         │                                                               │
//! │         └── I/O / config? ────► propagated to main, exit code 1        │
//! │                                                                         │
//! │  Bad input *inside* a prompt (not a number, unknown product, ...)      │
//! │  never reaches this type: the prompt repeats in place.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockwatch_core::CoreError;
use thiserror::Error;

use crate::state::ConfigError;

/// Errors raised by the terminal application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input was closed while a prompt was waiting.
    #[error("Input closed")]
    EndOfInput,

    /// Business rule rejected the action.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Startup configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Whether the menu loop can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Core(_))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
