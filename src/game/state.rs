//! Game state: history, current position and list order
//!
//! Every transition borrows the current state and returns the next one, so a
//! caller can keep or compare old states freely. Turn, winner and status are
//! recomputed from the board at `current_move` on every query.

use tracing::{debug, instrument, warn};

use crate::board::{Board, Mark};
use crate::error::{GameError, Result};
use crate::rules::{self, WinInfo};

use super::history::{History, HistoryEntry};

/// Status line shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// One row of the move list, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveListItem {
    /// History index this row jumps to. Stable across sort order.
    pub move_index: usize,
    pub label: String,
    pub location: Option<usize>,
    pub is_current: bool,
}

impl MoveListItem {
    /// "square: N", blank for the start entry
    pub fn location_text(&self) -> String {
        match self.location {
            Some(idx) => format!("square: {}", idx),
            None => "square:".to_string(),
        }
    }
}

/// Main game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    current_move: usize,
    sort_ascending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Fresh game with the given move list order
    pub fn with_order(sort_ascending: bool) -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            sort_ascending,
        }
    }

    /// New game keeping the current list order
    pub fn reset(&self) -> Self {
        Self::with_order(self.sort_ascending)
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    #[inline]
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Board at the current move
    pub fn board(&self) -> &Board {
        &self.history[self.current_move].board
    }

    /// Mark that plays next
    #[inline]
    pub fn current_player(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    #[inline]
    pub fn x_is_next(&self) -> bool {
        self.current_player() == Mark::X
    }

    pub fn winner_info(&self) -> Option<WinInfo> {
        rules::check_winner(self.board())
    }

    pub fn status(&self) -> Status {
        match self.winner_info() {
            Some(info) => Status::Winner(info.winner),
            None => Status::NextPlayer(self.current_player()),
        }
    }

    /// True when `index` belongs to the winning line
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winner_info().is_some_and(|info| info.contains(index))
    }

    /// Record `next_board` as the move played at `location`.
    ///
    /// Drops every entry after the current move, then appends.
    #[instrument(level = "debug", skip(self, next_board), fields(from = self.current_move))]
    pub fn play(&self, next_board: Board, location: usize) -> Self {
        let history = self.history.branch(
            self.current_move,
            HistoryEntry {
                board: next_board,
                location: Some(location),
            },
        );
        let current_move = history.last_index();
        debug!(current_move, board = %next_board, "move played");
        Self {
            history,
            current_move,
            sort_ascending: self.sort_ascending,
        }
    }

    /// Place the current player's mark at `index` if the move is legal
    pub fn try_click(&self, index: usize) -> Result<Self> {
        let board = self.board();
        rules::validate_move(board, index)?;
        Ok(self.play(board.with_mark(index, self.current_player()), index))
    }

    /// Cell click. Illegal moves return the state unchanged.
    pub fn click(&self, index: usize) -> Self {
        match self.try_click(index) {
            Ok(next) => next,
            Err(err) => {
                debug!(index, %err, "click ignored");
                self.clone()
            }
        }
    }

    pub fn try_jump_to(&self, move_index: usize) -> Result<Self> {
        if move_index >= self.history.len() {
            return Err(GameError::InvalidJump {
                requested: move_index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = move_index, "jump");
        Ok(Self {
            history: self.history.clone(),
            current_move: move_index,
            sort_ascending: self.sort_ascending,
        })
    }

    /// Move the pointer to `move_index` without touching history
    pub fn jump_to(&self, move_index: usize) -> Self {
        self.try_jump_to(move_index).unwrap_or_else(|err| {
            warn!(%err, "jump ignored");
            self.clone()
        })
    }

    /// One step back, no-op at the game start
    pub fn step_back(&self) -> Self {
        match self.current_move.checked_sub(1) {
            Some(prev) => self.jump_to(prev),
            None => self.clone(),
        }
    }

    /// One step forward, no-op at the newest entry
    pub fn step_forward(&self) -> Self {
        if self.current_move < self.history.last_index() {
            self.jump_to(self.current_move + 1)
        } else {
            self.clone()
        }
    }

    /// Flip the display order of the move list
    pub fn toggle_order(&self) -> Self {
        debug!(ascending = !self.sort_ascending, "move order toggled");
        Self {
            history: self.history.clone(),
            current_move: self.current_move,
            sort_ascending: !self.sort_ascending,
        }
    }

    /// Move list rows in display order
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut items: Vec<MoveListItem> = self
            .history
            .iter()
            .enumerate()
            .map(|(move_index, entry)| MoveListItem {
                move_index,
                label: if move_index > 0 {
                    format!("Go to move #{}", move_index)
                } else {
                    "Go to game start".to_string()
                },
                location: entry.location,
                is_current: move_index == self.current_move,
            })
            .collect();
        if !self.sort_ascending {
            items.reverse();
        }
        items
    }
}
