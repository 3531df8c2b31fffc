//! Game controller: move history, current position and derived status

pub mod history;
pub mod state;

pub use history::{History, HistoryEntry};
pub use state::{GameState, MoveListItem, Status};
