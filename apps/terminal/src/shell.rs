//! # Shell
//!
//! The main menu loop.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  greeting                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──► menu ──► choice ──► command(prompt, session)                     │
//! │  │                              │                                       │
//! │  │         Ok / Core error ◄────┤  ("Error: ..." printed)              │
//! │  └──────────────────────────────┘                                       │
//! │                                 │                                       │
//! │         7 / input closed ───────┴──► Ok(())                            │
//! │         I/O / config error ─────────► Err(AppError)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::commands::{
    add_or_update_products, change_system_config, generate_daily_report, record_sales,
    show_current_sales, show_inventory_status,
};
use crate::error::{AppError, AppResult};
use crate::prompt::Prompt;
use crate::state::Session;

// =============================================================================
// Menu
// =============================================================================

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManageProducts,
    RecordSales,
    InventoryStatus,
    CurrentSales,
    DailyReport,
    Settings,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ManageProducts,
        MenuChoice::RecordSales,
        MenuChoice::InventoryStatus,
        MenuChoice::CurrentSales,
        MenuChoice::DailyReport,
        MenuChoice::Settings,
        MenuChoice::Exit,
    ];

    /// Maps the 1-based menu number to a choice.
    pub fn from_number(n: i64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ManageProducts => "Add/update products",
            MenuChoice::RecordSales => "Record sales",
            MenuChoice::InventoryStatus => "Inventory status",
            MenuChoice::CurrentSales => "Current sales",
            MenuChoice::DailyReport => "Generate daily report",
            MenuChoice::Settings => "Change settings",
            MenuChoice::Exit => "Exit",
        }
    }
}

// =============================================================================
// Shell
// =============================================================================

/// Menu loop over a prompt and a session.
pub struct Shell<R, W> {
    prompt: Prompt<R, W>,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Shell {
            prompt: Prompt::new(input, output),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the shell, returning the writer.
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Runs until the operator exits or input closes.
    pub fn run(&mut self) -> AppResult<()> {
        self.prompt.say("Smart inventory manager")?;
        self.prompt
            .say("Track stock, expiry dates and sales for a small store.")?;
        let config = &self.session.config;
        self.prompt.say(format!(
            "Active settings: stock threshold {}%, expiry warning {} days.",
            config.threshold_percent(),
            config.expiry_warning_days
        ))?;

        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(AppError::EndOfInput) => {
                    debug!("Input closed, ending session");
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Command refused");
                    self.prompt.say(format!("Error: {}", e))?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Shows the menu and runs one action. Returns `false` on exit.
    pub fn step(&mut self) -> AppResult<bool> {
        self.show_menu()?;
        let answer = self.prompt.ask("Choose an option: ")?;
        let Some(choice) = answer.parse().ok().and_then(MenuChoice::from_number) else {
            warn!(answer = %answer, "Invalid menu choice");
            self.prompt.say("Error: choose a number from 1 to 7.")?;
            return Ok(true);
        };
        debug!(?choice, "Menu choice");

        let prompt = &mut self.prompt;
        let session = &mut self.session;
        match choice {
            MenuChoice::ManageProducts => add_or_update_products(prompt, session)?,
            MenuChoice::RecordSales => record_sales(prompt, session)?,
            MenuChoice::InventoryStatus => show_inventory_status(prompt, session)?,
            MenuChoice::CurrentSales => show_current_sales(prompt, session)?,
            MenuChoice::DailyReport => generate_daily_report(prompt, session)?,
            MenuChoice::Settings => change_system_config(prompt, session)?,
            MenuChoice::Exit => {
                prompt.say("Goodbye.")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn show_menu(&mut self) -> AppResult<()> {
        self.prompt.say("")?;
        self.prompt.say("========== Main menu ==========")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            self.prompt.say(format!("{}. {}", i + 1, choice.label()))?;
        }
        self.prompt.say("===============================")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{session, today};
    use std::io::Cursor;
    use stockwatch_core::SystemConfig;

    fn run_script(input: &str) -> (Session, String) {
        let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), session());
        shell.run().unwrap();
        let session = shell.session().clone();
        let out = String::from_utf8(shell.into_output()).unwrap();
        (session, out)
    }

    #[test]
    fn test_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::ManageProducts));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_exit() {
        let (_, out) = run_script("7\n");
        assert!(out.contains("Active settings: stock threshold 30%, expiry warning 3 days."));
        assert!(out.contains("1. Add/update products"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_greeting_shows_loaded_settings() {
        let config = SystemConfig {
            stock_threshold: 0.25,
            expiry_warning_days: 5,
            ..SystemConfig::default()
        };
        let session = Session::with_clock(config, today);
        let mut shell = Shell::new(Cursor::new(b"7\n".to_vec()), Vec::new(), session);
        shell.run().unwrap();

        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.contains("Active settings: stock threshold 25%, expiry warning 5 days."));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (_, out) = run_script("9\nabc\n7\n");
        assert_eq!(out.matches("Error: choose a number from 1 to 7.").count(), 2);
        assert_eq!(out.matches("========== Main menu ==========").count(), 3);
    }

    #[test]
    fn test_closed_input_ends_session() {
        let (session, _) = run_script("1\nMilk\n1000\n");
        assert!(session.inventory.is_empty());
    }

    #[test]
    fn test_report_without_products_is_recoverable() {
        let (_, out) = run_script("5\n2\n7\n");
        assert_eq!(
            out.matches("Error: No products registered: add at least one product first")
                .count(),
            2
        );
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_full_day() {
        let script = [
            "1",
            "Milk",
            "1000",
            "3",
            "10",
            "10",
            "2025-10-16",
            "Chips",
            "1500",
            "1",
            "20",
            "20",
            "",
            "done",
            "2",
            "Milk",
            "3",
            "Chips",
            "5",
            "done",
            "5",
            "5",
            "7",
        ]
        .join("\n")
            + "\n";

        let (session, out) = run_script(&script);

        // stock is taken off twice: the report was run twice
        assert_eq!(session.inventory.find("Milk").unwrap().current_stock, 4);
        assert_eq!(session.inventory.find("Chips").unwrap().current_stock, 10);
        assert_eq!(session.today(), today());

        assert_eq!(out.matches("Report complete.").count(), 2);
        assert!(out.contains("1. Chips (5 sold, revenue ₩7500)"));
        assert!(out.contains("2. Milk (3 sold, revenue ₩3000)"));
    }
}
