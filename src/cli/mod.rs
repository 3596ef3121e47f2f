//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;

/// Tokenwatch - Telegram bot posting periodic on-chain token prices.
#[derive(Parser, Debug)]
#[command(name = "tokenwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (defaults to `config.toml` if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validate configuration and credentials, then exit
    #[arg(long)]
    pub check_config: bool,
}
