//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Tic-tac-toe with move history and replay
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(long)]
    pub descending: bool,

    /// Initial window width
    #[arg(long)]
    pub width: Option<f32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<f32>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "tictactoe=trace")
    #[arg(long)]
    pub log_filter: Option<String>,
}
