//! Tic-tac-toe GUI
//!
//! A graphical tic-tac-toe board with move history and replay.

use clap::Parser;
use tictactoe::cli::Cli;
use tictactoe::ui::TicTacToeApp;
use tictactoe::{AppConfig, AppError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(?config, "starting tic-tac-toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 260.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )?;

    Ok(())
}
