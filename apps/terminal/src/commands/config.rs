//! # Config Commands
//!
//! Runtime changes to the stock threshold and expiry warning window.
//! A blank answer keeps the current value. The discount policy is left as
//! loaded at startup.

use std::io::{BufRead, Write};

use stockwatch_core::validation::{validate_threshold_percent, validate_warning_days};
use tracing::info;

use crate::error::AppResult;
use crate::prompt::Prompt;
use crate::state::Session;

pub fn change_system_config<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    prompt.say("")?;
    prompt.say("--- Change settings ---")?;

    let current = &session.config;
    let threshold_question = format!(
        "New low-stock threshold in % (current: {}%): ",
        current.threshold_percent()
    );
    let current_threshold = current.stock_threshold;
    let stock_threshold = loop {
        let Some(percent) = prompt.ask_parsed_opt(&threshold_question)? else {
            break current_threshold;
        };
        match validate_threshold_percent(percent) {
            Ok(fraction) => break fraction,
            Err(e) => prompt.say(format!("Error: {}.", e))?,
        }
    };

    let days_question = format!(
        "New expiry warning window in days (current: {} days): ",
        current.expiry_warning_days
    );
    let current_days = current.expiry_warning_days;
    let expiry_warning_days = loop {
        let Some(days) = prompt.ask_parsed_opt(&days_question)? else {
            break current_days;
        };
        match validate_warning_days(days) {
            Ok(()) => break days,
            Err(e) => prompt.say(format!("Error: {}.", e))?,
        }
    };

    session.config.stock_threshold = stock_threshold;
    session.config.expiry_warning_days = expiry_warning_days;
    info!(
        stock_threshold,
        expiry_warning_days, "System configuration changed"
    );

    prompt.say(format!(
        "Settings updated: stock threshold {}%, expiry warning {} days",
        session.config.threshold_percent(),
        session.config.expiry_warning_days
    ))?;
    Ok(())
}
