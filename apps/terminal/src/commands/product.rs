//! # Product Commands
//!
//! Registering and updating products.
//!
//! ## Entry Flow
//! ```text
//! name ──► price ──► category ──► optimal stock ──► current stock ──► expiry
//!   │                                                                   │
//!   └── blank / "done" ends the loop          Inventory::upsert ◄───────┘
//! ```
//!
//! Entering a name that already exists replaces that product entirely.

use std::io::{BufRead, Write};

use stockwatch_core::validation::{validate_price, validate_product_name, validate_stock_level};
use stockwatch_core::{Category, Money, Product, Registration};
use tracing::info;

use super::is_done;
use crate::error::AppResult;
use crate::prompt::Prompt;
use crate::state::Session;

/// Reads products until the operator types `done`.
pub fn add_or_update_products<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    prompt.say("")?;
    prompt.say("--- Product management ---")?;
    prompt.say("Enter product details. Type 'done' as the name to finish.")?;

    loop {
        let name = prompt.ask("Product name ('done' to finish): ")?;
        if is_done(&name) {
            break;
        }
        if let Err(e) = validate_product_name(&name) {
            prompt.say(format!("Error: {}.", e))?;
            continue;
        }

        let price = prompt.ask_checked(&format!(" > Price of {}: ", name), validate_price)?;
        let category = prompt.ask_category(&format!(
            " > Category of {} ({}): ",
            name,
            Category::menu_legend()
        ))?;
        let optimal_stock = prompt.ask_checked(&format!(" > Optimal stock of {}: ", name), |v| {
            validate_stock_level("optimal stock", v)
        })?;
        let current_stock = prompt.ask_checked(&format!(" > Current stock of {}: ", name), |v| {
            validate_stock_level("current stock", v)
        })?;
        let expiry_date = prompt.ask_date(&format!(
            " > Expiry date of {} (YYYY-MM-DD, blank for none): ",
            name
        ))?;

        let mut product = Product::new(
            name.clone(),
            Money::from_units(price),
            category,
            optimal_stock,
            current_stock,
        );
        product.expiry_date = expiry_date;
        let summary = product.display_info();

        let outcome = session.inventory.upsert(product);
        info!(name = %name, ?outcome, "Product registered");
        match outcome {
            Registration::Added => prompt.say(format!(" >> '{}' was added.", name))?,
            Registration::Updated => prompt.say(format!(" >> '{}' was updated.", name))?,
        }
        prompt.say(format!("    {}", summary))?;
        prompt.say("")?;
    }

    Ok(())
}
