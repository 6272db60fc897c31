//! # Canteen Console Library
//!
//! Interactive front end for the canteen store.
//!
//! ## Module Organization
//! ```text
//! canteen_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap flags
//! ├── config.rs       ◄─── AppConfig: file → env → flags
//! ├── error.rs        ◄─── AppError shown to the operator
//! └── menu/
//!     ├── mod.rs      ◄─── Console, role select, login
//!     ├── admin.rs    ◄─── Staff and stock management
//!     ├── employee.rs ◄─── Ordering session
//!     ├── prompt.rs   ◄─── Line prompts over any reader/writer
//!     └── format.rs   ◄─── Fixed-width tables
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;

use std::io;

use canteen_store::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;
use error::AppResult;
use menu::Console;

/// Runs the console on the process's stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber to stderr, RUST_LOG or warn,canteen=info       │
/// │                                                                         │
/// │  2. Resolve Configuration                                               │
/// │     • defaults → config.toml → CANTEEN_* → flags, then validate         │
/// │                                                                         │
/// │  3. Open Store                                                          │
/// │     • file backend: create data_dir if needed                           │
/// │                                                                         │
/// │  4. Menu Loop                                                           │
/// │     • until "Exit" or end of input                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> AppResult<()> {
    init_tracing();

    info!("Starting canteen console");

    let config = AppConfig::resolve(&cli)?;
    let store = Store::open(config.storage.clone())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), store, &config.auth);
    console.run()?;

    info!("Canteen console stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including skipped lines
/// - `RUST_LOG=canteen_store=trace` - Storage crate only
/// - Default: `warn,canteen=info`
///
/// Logs go to stderr so they stay out of the menu output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,canteen=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
