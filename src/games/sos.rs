//! SOS.
//!
//! - 3 × 3 board
//! - Players place their own letter, `S` or `O`, in any empty cell
//! - The game is won as soon as `S`,`O`,`S` reads along a row, column or diagonal
//!
//! The win check looks for the literal letters no matter which symbol it
//! is asked about: a pattern completed by either player counts as a win
//! for whoever is asked. A per-mover check would change that.

use crate::core::{Board, Cell, GameError, GameKind, Symbol};
use crate::rules::{ensure_dimensions, BoardGame};

/// The only two letters SOS accepts.
pub const S: Symbol = Symbol::new('S');
/// See [`S`].
pub const O: Symbol = Symbol::new('O');

/// Letters of the winning pattern.
const PATTERN: [Symbol; 3] = [S, O, S];

/// Directions scanned from each `S`: right, down, down-right, down-left.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// SOS rules over a 3x3 board.
#[derive(Clone, Debug)]
pub struct Sos {
    board: Board,
}

impl Sos {
    /// Number of rows.
    pub const ROWS: usize = 3;
    /// Number of columns.
    pub const COLUMNS: usize = 3;

    /// Create a game with an empty board.
    pub fn new() -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(Self::ROWS, Self::COLUMNS)?,
        })
    }

    fn pattern_from(&self, row: i32, column: i32, d_row: i32, d_col: i32) -> bool {
        PATTERN.iter().zip(0..).all(|(&letter, step)| {
            self.board
                .get_cell(row + step * d_row, column + step * d_col)
                .is_some_and(|cell| cell.holds(letter))
        })
    }
}

impl BoardGame for Sos {
    fn kind(&self) -> GameKind {
        GameKind::Sos
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn replace_board(&mut self, board: Board) -> Result<(), GameError> {
        ensure_dimensions(&board, Self::ROWS, Self::COLUMNS)?;
        self.board = board;
        Ok(())
    }

    fn is_valid_move(&self, row: i32, column: i32, symbol: Symbol) -> bool {
        self.board.get_cell(row, column) == Some(Cell::Empty) && (symbol == S || symbol == O)
    }

    fn make_move(&mut self, row: i32, column: i32, symbol: Symbol) {
        self.board.set_cell(row, column, symbol);
    }

    /// `_symbol` is not consulted; see the module docs.
    fn check_for_winner(&self, _symbol: Symbol) -> bool {
        for row in 0..self.board.rows() as i32 {
            for column in 0..self.board.columns() as i32 {
                if DIRECTIONS
                    .iter()
                    .any(|&(d_row, d_col)| self.pattern_from(row, column, d_row, d_col))
                {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = Sos::new().unwrap();
        assert_eq!(game.rows(), 3);
        assert_eq!(game.columns(), 3);
        assert_eq!(game.kind(), GameKind::Sos);
        assert!(!game.check_for_winner(S));
    }

    #[test]
    fn test_only_s_and_o_allowed() {
        let game = Sos::new().unwrap();
        assert!(game.is_valid_move(0, 0, S));
        assert!(game.is_valid_move(0, 0, O));
        assert!(!game.is_valid_move(0, 0, Symbol::new('X')));
        assert!(!game.is_valid_move(0, 0, Symbol::new('s')));
    }

    #[test]
    fn test_occupied_and_out_of_bounds_invalid() {
        let mut game = Sos::new().unwrap();
        game.make_move(1, 1, O);

        assert!(!game.is_valid_move(1, 1, S));
        assert!(!game.is_valid_move(3, 0, S));
        assert!(!game.is_valid_move(0, -1, S));
    }

    #[test]
    fn test_direct_placement() {
        let mut game = Sos::new().unwrap();
        game.make_move(0, 2, S);
        assert_eq!(game.board().get_cell(0, 2), Some(Cell::Marked(S)));
        assert_eq!(game.board().get_cell(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_row_pattern_wins_for_any_symbol() {
        let mut game = Sos::new().unwrap();
        game.make_move(0, 0, S);
        game.make_move(0, 1, O);
        game.make_move(0, 2, S);

        assert!(game.check_for_winner(S));
        assert!(game.check_for_winner(O));
        assert!(game.check_for_winner(Symbol::new('+')));
    }

    #[test]
    fn test_anti_diagonal_pattern() {
        let mut game = Sos::new().unwrap();
        game.make_move(0, 2, S);
        game.make_move(1, 1, O);
        game.make_move(2, 0, S);

        assert!(game.check_for_winner(O));
    }

    #[test]
    fn test_reversed_letters_do_not_win() {
        let mut game = Sos::new().unwrap();
        game.make_move(0, 0, O);
        game.make_move(0, 1, S);
        game.make_move(0, 2, O);

        assert!(!game.check_for_winner(S));
        assert!(!game.check_for_winner(O));
    }
}
