//! Binary entry point: parse arguments, set up logging, run the TUI.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::Cli;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output never interferes with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tictactoe_tui");
    tictactoe_tui::tui::run(&cli)
}
