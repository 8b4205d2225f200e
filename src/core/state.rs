//! Session status and history snapshots.
//!
//! ## GameStatus
//!
//! `NotStarted → Playing → {Won, Tied, Abandoned}`. The last three are
//! terminal; undo can reopen a finished game.
//!
//! ## Snapshot
//!
//! Immutable copy of the board plus whose turn it is. Cloning a
//! [`Board`] is O(1) and never aliases the live grid.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::PlayerId;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No turn has been played yet.
    #[default]
    NotStarted,
    /// Turns are being played.
    Playing,
    /// The given seat completed a winning pattern.
    Won(PlayerId),
    /// No seat has a legal move left and nobody won.
    Tied,
    /// A player quit.
    Abandoned,
}

impl GameStatus {
    /// Check if the session has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Tied | GameStatus::Abandoned)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Board contents plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    current_player: PlayerId,
}

impl Snapshot {
    /// Capture a snapshot.
    #[must_use]
    pub fn new(board: Board, current_player: PlayerId) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// The captured board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it was.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Split into board and player.
    #[must_use]
    pub fn into_parts(self) -> (Board, PlayerId) {
        (self.board, self.current_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Symbol;

    #[test]
    fn test_terminal_states() {
        assert!(!GameStatus::NotStarted.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Won(PlayerId::new(1)).is_terminal());
        assert!(GameStatus::Tied.is_terminal());
        assert!(GameStatus::Abandoned.is_terminal());

        assert_eq!(GameStatus::Won(PlayerId::new(1)).winner(), Some(PlayerId::new(1)));
        assert_eq!(GameStatus::Tied.winner(), None);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new(3, 3).unwrap();
        let snapshot = Snapshot::new(board.clone(), PlayerId::new(1));

        board.set_cell(0, 0, Symbol::new('S'));

        assert!(snapshot.board().cells().all(|c| c.is_empty()));
        assert_eq!(snapshot.current_player(), PlayerId::new(1));
    }
}
