//! Undo/redo history.
//!
//! A snapshot is recorded before every applied move. Undo swaps the live
//! state for the newest recorded snapshot and keeps the live state for
//! redo; redo is the mirror. Recording a new move drops the redo branch.

use crate::core::Snapshot;

/// Undo and redo stacks of [`Snapshot`]s.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state before a move. Clears the redo stack.
    pub fn record(&mut self, before_move: Snapshot) {
        self.undo.push(before_move);
        self.redo.clear();
    }

    /// Step back: returns the state to restore and keeps `current` for redo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward: returns the state to restore and keeps `current` for undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Check if there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Check if there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of recorded moves that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, PlayerId, Symbol};

    fn snapshot(marks: &[(i32, i32)], player: u8) -> Snapshot {
        let mut board = Board::new(3, 3).unwrap();
        for &(row, column) in marks {
            board.set_cell(row, column, Symbol::new('S'));
        }
        Snapshot::new(board, PlayerId::new(player))
    }

    #[test]
    fn test_undo_redo_round() {
        let mut history = History::new();
        let s0 = snapshot(&[], 0);
        let s1 = snapshot(&[(0, 0)], 1);
        let s2 = snapshot(&[(0, 0), (1, 1)], 0);

        history.record(s0.clone());
        history.record(s1.clone());
        assert_eq!(history.undo_depth(), 2);

        assert_eq!(history.undo(s2.clone()), Some(s1.clone()));
        assert_eq!(history.undo(s1.clone()), Some(s0.clone()));
        assert_eq!(history.undo(s0.clone()), None);
        assert!(history.can_redo());

        assert_eq!(history.redo(s0.clone()), Some(s1.clone()));
        assert_eq!(history.redo(s1), Some(s2));
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        history.record(snapshot(&[], 0));
        history.undo(snapshot(&[(0, 0)], 1));
        assert!(history.can_redo());

        history.record(snapshot(&[], 0));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record(snapshot(&[], 0));
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
