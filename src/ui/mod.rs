//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
pub mod history_view;
mod theme;

pub use app::{Action, TicTacToeApp};
pub use history_view::HistoryAction;
