//! Strictly Rounds - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use strictly_rounds_tui::{Cli, TuiConfig, runtime};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::resolve(&cli)?;

    runtime::init_tracing(&config)?;
    runtime::run(config).await
}
