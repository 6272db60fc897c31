//! # Canteen Console Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags (clap)
//! 2. Hand over to `canteen_console::run`
//! 3. Map a start-up failure to exit code 1

use std::process::ExitCode;

use canteen_console::cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match canteen_console::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("canteen: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
