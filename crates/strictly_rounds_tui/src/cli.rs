//! Command-line interface for strictly_rounds_tui.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Rounds - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_rounds_tui")]
#[command(about = "Two-player tic-tac-toe with a session scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds to wait before showing the round summary
    #[arg(long)]
    pub reveal_delay_ms: Option<u64>,

    /// Log file (the terminal is busy drawing the board)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
