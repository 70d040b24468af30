//! # Inventory Commands
//!
//! Current stock listing.
//!
//! The `LOW` marker here uses the strict `current / optimal < threshold`
//! check ([`Product::is_below_threshold`](stockwatch_core::Product::is_below_threshold)).
//! The daily report uses the inclusive check, so a product sitting exactly
//! at the threshold is flagged in the report but not here.

use std::io::{BufRead, Write};

use crate::error::AppResult;
use crate::prompt::Prompt;
use crate::state::Session;

const TABLE_RULE_WIDTH: usize = 50;

pub fn show_inventory_status<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &Session,
) -> AppResult<()> {
    prompt.say("")?;
    prompt.say("--- Inventory status ---")?;
    if session.inventory.is_empty() {
        prompt.say("No products registered.")?;
        return Ok(());
    }

    prompt.say(format!("{:<20} | {:<8} | {:<12}", "Product", "Stock", "Expiry"))?;
    prompt.say("-".repeat(TABLE_RULE_WIDTH))?;

    let threshold = session.config.stock_threshold;
    for product in session.inventory.products() {
        let expiry = product
            .expiry_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let line = format!(
            "{:<20} | {:<8} | {:<12}",
            product.name, product.current_stock, expiry
        );
        if product.is_below_threshold(threshold) {
            prompt.say(format!("{} LOW", line))?;
        } else {
            prompt.say(line.trim_end())?;
        }
    }
    Ok(())
}
