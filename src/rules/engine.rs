//! Board game trait for rule variants.
//!
//! Variants implement `BoardGame` to define their rules:
//! - What moves are legal
//! - How a move changes the board
//! - Win conditions

use crate::core::board::{Board, Symbol};
use crate::core::config::GameKind;
use crate::core::error::GameError;

/// Board game trait.
///
/// Each variant owns exactly one [`Board`]. The session manager calls
/// these methods during play; it never interprets variant-specific rules.
///
/// ## Implementation Notes
///
/// - `is_valid_move`: must be pure; players call it repeatedly while searching
/// - `make_move`: callers validate first; an invalid move must leave the board unchanged
/// - `check_for_winner`: full-board scan, no last-move shortcut
pub trait BoardGame {
    /// Which variant this is.
    fn kind(&self) -> GameKind;

    /// The current board.
    fn board(&self) -> &Board;

    /// Replace the board wholesale.
    ///
    /// Used by undo/redo and load. Fails if the dimensions differ from the
    /// variant's fixed size.
    fn replace_board(&mut self, board: Board) -> Result<(), GameError>;

    /// Check whether `symbol` may be placed at `(row, column)`.
    fn is_valid_move(&self, row: i32, column: i32, symbol: Symbol) -> bool;

    /// Place `symbol` at `(row, column)` following the variant's insertion policy.
    fn make_move(&mut self, row: i32, column: i32, symbol: Symbol);

    /// Check whether the board shows a win for `symbol`.
    fn check_for_winner(&self, symbol: Symbol) -> bool;

    // === Convenience Methods ===

    /// Number of rows.
    fn rows(&self) -> usize {
        self.board().rows()
    }

    /// Number of columns.
    fn columns(&self) -> usize {
        self.board().columns()
    }

    /// Reset to an empty board of the variant's fixed size.
    fn initialize_board(&mut self) -> Result<(), GameError> {
        let board = Board::new(self.rows(), self.columns())?;
        self.replace_board(board)
    }

    /// Enumerate every `(row, column)` accepted by `is_valid_move` for `symbol`.
    fn legal_moves(&self, symbol: Symbol) -> Vec<(i32, i32)> {
        let mut moves = Vec::new();

        for row in 0..self.rows() as i32 {
            for column in 0..self.columns() as i32 {
                if self.is_valid_move(row, column, symbol) {
                    moves.push((row, column));
                }
            }
        }

        moves
    }

    /// Check whether `symbol` has at least one legal move.
    fn has_legal_move(&self, symbol: Symbol) -> bool {
        (0..self.rows() as i32).any(|row| {
            (0..self.columns() as i32).any(|column| self.is_valid_move(row, column, symbol))
        })
    }

    /// Render the board as console text.
    fn print_board(&self) -> String {
        self.board().render()
    }
}

/// Check that `board` has the expected dimensions before swapping it in.
pub(crate) fn ensure_dimensions(board: &Board, rows: usize, columns: usize) -> Result<(), GameError> {
    if board.rows() != rows || board.columns() != columns {
        return Err(GameError::IncompatibleSave {
            reason: format!(
                "expected a {}x{} board, found {}x{}",
                rows,
                columns,
                board.rows(),
                board.columns()
            ),
        });
    }
    Ok(())
}
