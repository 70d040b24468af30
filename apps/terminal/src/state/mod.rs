//! # State Module
//!
//! Session state and its startup configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │   config::load_from_env() ──► SystemConfig ──► Session::new(config)    │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                         Shell passes &mut Session       │
//! │                                         to each command in turn         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
mod session;

pub use config::ConfigError;
pub use session::{Clock, Session};
