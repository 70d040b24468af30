//! # Session State
//!
//! Everything one run of the terminal owns: the product list, today's sales
//! and the active configuration.
//!
//! ## Lifetime
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process start ──► Session::new(config)                                │
//! │                          │                                              │
//! │                          ├── inventory : Inventory     (add/update)    │
//! │                          ├── sales     : SalesRecord   (accumulates)   │
//! │                          ├── config    : SystemConfig  (settings menu) │
//! │                          └── clock     : fn() -> date  (report "today")│
//! │                          │                                              │
//! │  process exit  ──► dropped; nothing persists                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is one thread of control, so the session is a plain owned value
//! passed by `&mut` to each command. No locking.

use chrono::{Local, NaiveDate};
use stockwatch_core::{Inventory, SalesRecord, SystemConfig};

/// Source of the current calendar date.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The in-memory state of one terminal session.
#[derive(Debug, Clone)]
pub struct Session {
    pub inventory: Inventory,
    pub sales: SalesRecord,
    pub config: SystemConfig,
    clock: Clock,
}

impl Session {
    /// Creates an empty session that reads dates from the local clock.
    pub fn new(config: SystemConfig) -> Self {
        Session::with_clock(config, local_today)
    }

    /// Creates an empty session with a custom clock.
    pub fn with_clock(config: SystemConfig, clock: Clock) -> Self {
        Session {
            inventory: Inventory::new(),
            sales: SalesRecord::new(),
            config,
            clock,
        }
    }

    /// Today's date according to the session clock.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}
