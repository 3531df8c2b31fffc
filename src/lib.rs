//! Tic-tac-toe with move history and replay
//!
//! A 3x3 game where every position is kept in a linear history. Any earlier
//! position can be revisited; playing from it discards the later moves.
//!
//! # Architecture
//!
//! - [`board`]: Board, marks and positions
//! - [`rules`]: Win detection and move legality
//! - [`game`]: History and the game state controller
//! - [`ui`]: egui/eframe front end
//! - [`config`] / [`cli`]: Window and display settings
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, Mark};
//!
//! let state = [0, 4, 1, 7, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |s, idx| s.click(idx));
//!
//! let win = state.winner_info().unwrap();
//! assert_eq!(win.winner, Mark::X);
//! assert_eq!(win.line, [0, 1, 2]);
//! assert_eq!(state.status().to_string(), "Winner: X");
//!
//! // Revisit move 2 and branch from there
//! let branched = state.jump_to(2).click(8);
//! assert_eq!(branched.history().len(), 4);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::AppConfig;
pub use error::{AppError, ConfigError, GameError, MoveError};
pub use game::{GameState, History, HistoryEntry, MoveListItem, Status};
pub use rules::{check_winner, WinInfo, WINNING_LINES};
