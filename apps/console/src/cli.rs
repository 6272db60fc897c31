//! Command-line flags for the `canteen` binary.
//!
//! Flags are the last configuration layer: they override the config file and
//! `CANTEEN_*` environment variables.

use std::path::PathBuf;

use clap::Parser;

/// Parsed CLI entrypoint for the `canteen` binary.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "canteen", version, about = "Canteen inventory and ordering console")]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the table files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep all tables in memory; nothing is written to disk
    #[arg(long)]
    pub memory: bool,

    /// Write decremented stock back to the inventory file after each order
    #[arg(long)]
    pub persist_stock: bool,
}
