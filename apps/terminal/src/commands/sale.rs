//! # Sale Commands
//!
//! Recording today's sales and listing the running totals.
//!
//! Recording a sale only adds to the [`SalesRecord`](stockwatch_core::SalesRecord);
//! stock is taken off the shelves when the daily report is generated.

use std::io::{BufRead, Write};

use stockwatch_core::validation::validate_sale_entry;
use stockwatch_core::{CoreError, Money};
use tracing::info;

use super::is_done;
use crate::error::AppResult;
use crate::prompt::Prompt;
use crate::state::Session;

const TABLE_RULE_WIDTH: usize = 55;

/// Reads `(name, quantity)` pairs until the operator types `done`.
///
/// Names must already be registered. Quantities for the same name add up,
/// up to [`MAX_DAILY_SALES`](stockwatch_core::MAX_DAILY_SALES) per product.
pub fn record_sales<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    if session.inventory.is_empty() {
        return Err(CoreError::EmptyInventory.into());
    }

    prompt.say("")?;
    prompt.say("--- Record sales ---")?;
    prompt.say("Enter each product sold and its quantity. Type 'done' as the name to finish.")?;

    loop {
        let name = prompt.ask("Product sold ('done' to finish): ")?;
        if is_done(&name) {
            break;
        }
        if !session.inventory.contains(&name) {
            prompt.say(format!(
                "Error: {}. Please try again.",
                CoreError::ProductNotFound(name)
            ))?;
            continue;
        }

        let already_sold = session.sales.quantity_of(&name);
        let quantity = prompt.ask_checked(&format!(" > Quantity of '{}' sold: ", name), |q| {
            validate_sale_entry(already_sold, q)
        })?;
        session.sales.record(&name, quantity);
        info!(
            name = %name,
            quantity,
            total = session.sales.quantity_of(&name),
            "Sale recorded"
        );
        prompt.say(format!(" >> Recorded {} x '{}'.", quantity, name))?;
        prompt.say("")?;
    }

    Ok(())
}

/// Prints each sale line at current shelf prices and the running total.
pub fn show_current_sales<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &Session,
) -> AppResult<()> {
    prompt.say("")?;
    prompt.say("--- Current sales ---")?;
    if session.sales.is_empty() {
        prompt.say("No sales recorded yet.")?;
        return Ok(());
    }

    prompt.say(format!(
        "{:<20} | {:<8} | {:<8} | {:<10}",
        "Product", "Price", "Qty", "Revenue"
    ))?;
    prompt.say("-".repeat(TABLE_RULE_WIDTH))?;

    let mut total = Money::zero();
    for entry in session.sales.iter() {
        let Some(product) = session.inventory.find(&entry.name) else {
            continue;
        };
        let revenue = product.price.multiply_quantity(entry.quantity);
        total += revenue;
        prompt.say(format!(
            "{:<20} | {:<8} | {:<8} | {:<10}",
            entry.name,
            product.price.to_string(),
            entry.quantity,
            revenue.to_string()
        ))?;
    }

    prompt.say("-".repeat(TABLE_RULE_WIDTH))?;
    prompt.say(format!("Total so far: {}", total))?;
    Ok(())
}
