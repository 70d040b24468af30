//! # Commands Module
//!
//! One function per main-menu action. Each takes the prompt and the session
//! and returns `AppResult<()>`.
//!
//! ## Available Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu  Command                         Module      Session access      │
//! │  ────  ──────────────────────────────  ──────────  ─────────────────    │
//! │   1    add_or_update_products          product     inventory (write)    │
//! │   2    record_sales                    sale        sales (write)        │
//! │   3    show_inventory_status           inventory   inventory (read)     │
//! │   4    show_current_sales              sale        sales (read)         │
//! │   5    generate_daily_report           report      inventory (write)    │
//! │   6    change_system_config            config      config (write)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod inventory;
pub mod product;
pub mod report;
pub mod sale;

pub use config::change_system_config;
pub use inventory::show_inventory_status;
pub use product::add_or_update_products;
pub use report::generate_daily_report;
pub use sale::{record_sales, show_current_sales};

/// Word that ends a multi-entry loop.
pub const DONE_KEYWORD: &str = "done";

/// A blank answer or `done` (any case) ends an entry loop.
fn is_done(answer: &str) -> bool {
    answer.is_empty() || answer.eq_ignore_ascii_case(DONE_KEYWORD)
}
