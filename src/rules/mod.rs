//! Game rules for tic-tac-toe
//!
//! - Win detection over the 8 fixed lines
//! - Move legality (empty cell, game not yet won)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{is_valid_move, validate_move};
pub use win::{check_winner, winner, WinInfo, WINNING_LINES};
