//! Move history

use crate::board::Board;

/// One stored position and the cell played to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// `None` for the game start
    pub location: Option<usize>,
}

impl HistoryEntry {
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }
}

/// Linear history. Always starts with the empty board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for History {
    type Output = HistoryEntry;

    fn index(&self, move_index: usize) -> &HistoryEntry {
        &self.entries[move_index]
    }
}

impl History {
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(10);
        entries.push(HistoryEntry::start());
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the start entry is never removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, move_index: usize) -> Option<&HistoryEntry> {
        self.entries.get(move_index)
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Copy of the history up to and including `move_index`, with `entry`
    /// appended. Entries after `move_index` are dropped.
    pub fn branch(&self, move_index: usize, entry: HistoryEntry) -> Self {
        let keep = (move_index + 1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(entry);
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    fn entry(board: Board, location: usize) -> HistoryEntry {
        HistoryEntry {
            board,
            location: Some(location),
        }
    }

    #[test]
    fn test_new_history_has_start() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0), Some(&HistoryEntry::start()));
        assert_eq!(history.last_index(), 0);
    }

    #[test]
    fn test_branch_appends_at_end() {
        let history = History::new();
        let b1 = Board::new().with_mark(4, Mark::X);
        let next = history.branch(0, entry(b1, 4));
        assert_eq!(next.len(), 2);
        assert_eq!(next.get(1).map(|e| e.location), Some(Some(4)));
        // Original untouched
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_branch_drops_future() {
        let b1 = Board::new().with_mark(0, Mark::X);
        let b2 = b1.with_mark(1, Mark::O);
        let b3 = b2.with_mark(2, Mark::X);
        let history = History::new()
            .branch(0, entry(b1, 0))
            .branch(1, entry(b2, 1))
            .branch(2, entry(b3, 2));
        assert_eq!(history.len(), 4);

        let alt = b1.with_mark(8, Mark::O);
        let branched = history.branch(1, entry(alt, 8));
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.get(2).map(|e| e.board), Some(alt));
        assert!(branched.get(3).is_none());
    }
}
