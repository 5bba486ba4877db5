//! Command-line interface for tictactoe_tui.

use clap::Parser;

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log file path (tracing output goes to a file so it never
    /// corrupts the raw-mode terminal).
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: std::path::PathBuf,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value = "100")]
    pub tick_rate: u64,
}
