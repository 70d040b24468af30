//! # Stockwatch Entry Point
//!
//! The setup lives in `lib.rs`; this only maps the outcome to an exit code.

use std::process::ExitCode;

fn main() -> ExitCode {
    match stockwatch_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stockwatch: {}", e);
            ExitCode::FAILURE
        }
    }
}
