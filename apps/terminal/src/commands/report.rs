//! # Report Commands
//!
//! Runs the daily report against the session.
//!
//! ## Report Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  inventory empty? ── yes ──► CoreError::EmptyInventory                 │
//! │        │ no                                                             │
//! │        ▼                                                                │
//! │  generate_report_on(inventory.products_mut(), &sales, &config, today)  │
//! │        │                                                                │
//! │        ├── session stock reduced by today's sales                      │
//! │        └── rendered report text ──► stdout                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sales record is not cleared, so running the report again subtracts
//! the accumulated sales a second time.

use std::io::{BufRead, Write};

use stockwatch_core::report::generate_report_on;
use stockwatch_core::CoreError;
use tracing::info;

use crate::error::AppResult;
use crate::prompt::Prompt;
use crate::state::Session;

pub fn generate_daily_report<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    if session.inventory.is_empty() {
        return Err(CoreError::EmptyInventory.into());
    }

    prompt.say("")?;
    prompt.say("Running analysis...")?;

    let today = session.today();
    let text = generate_report_on(
        session.inventory.products_mut(),
        &session.sales,
        &session.config,
        today,
    );
    info!(
        %today,
        products = session.inventory.len(),
        sales_entries = session.sales.len(),
        "Daily report generated"
    );

    prompt.say("")?;
    prompt.say(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, prompt, session};
    use crate::error::AppError;
    use stockwatch_core::{Category, Money, Product};

    #[test]
    fn test_refuses_empty_inventory() {
        let mut session = session();
        let mut p = prompt("");
        let err = generate_daily_report(&mut p, &mut session).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::EmptyInventory)));
    }

    #[test]
    fn test_report_mutates_session_stock() {
        let mut session = session();
        session.inventory.upsert(Product::new(
            "Milk",
            Money::from_units(1000),
            Category::Food,
            10,
            10,
        ));
        session.sales.record("Milk", 2);

        let mut p = prompt("");
        generate_daily_report(&mut p, &mut session).unwrap();

        assert_eq!(session.inventory.find("Milk").unwrap().current_stock, 8);
        let out = output(p);
        assert!(out.contains("=== Smart Inventory Report (2025-10-15) ==="));
        assert!(out.contains("1. Milk (2 sold, revenue ₩2000)"));
        assert!(out.contains("Report complete."));
    }
}
