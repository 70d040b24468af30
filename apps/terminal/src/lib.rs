//! # Stockwatch Terminal
//!
//! Interactive inventory tracker for a small convenience store.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockwatch Terminal                              │
//! │                                                                         │
//! │  main.rs ────► calls run(), maps errors to an exit code                │
//! │                                                                         │
//! │  lib.rs ─────► logging, configuration, shell startup                   │
//! │                                                                         │
//! │  shell ──────► main menu loop                                          │
//! │                                                                         │
//! │  commands/ ──► add_or_update_products, record_sales,                   │
//! │                show_inventory_status, show_current_sales,              │
//! │                generate_daily_report, change_system_config             │
//! │                                                                         │
//! │  prompt ─────► line-oriented input with re-prompting                   │
//! │                                                                         │
//! │  state/ ─────► Session (inventory, sales, config, clock)               │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │              stockwatch-core (metrics + report engine)           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything lives in memory for the length of one run.

pub mod commands;
pub mod error;
pub mod prompt;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{AppError, AppResult};
pub use shell::Shell;
pub use state::Session;

/// Runs the terminal application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (stderr, RUST_LOG or "warn")                    │
/// │  2. Load SystemConfig from STOCKWATCH_* variables                      │
/// │  3. Create an empty Session                                            │
/// │  4. Run the Shell on locked stdin / stdout                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = state::config::load_from_env()?;
    info!(
        stock_threshold = config.stock_threshold,
        expiry_warning_days = config.expiry_warning_days,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), Session::new(config));
    shell.run()?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Log lines go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
