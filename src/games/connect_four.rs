//! Connect Four.
//!
//! - 6 rows × 7 columns
//! - Pieces drop to the lowest empty cell of the chosen column
//! - Four of one symbol in a row (horizontal, vertical or diagonal) wins

use tracing::debug;

use crate::core::{Board, Cell, GameError, GameKind, Symbol};
use crate::rules::{ensure_dimensions, BoardGame};

/// Run length needed to win.
const RUN: i32 = 4;

/// Directions scanned from each cell: right, down, down-right, down-left.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Connect Four rules over a 6x7 board.
#[derive(Clone, Debug)]
pub struct ConnectFour {
    board: Board,
}

impl ConnectFour {
    /// Number of rows.
    pub const ROWS: usize = 6;
    /// Number of columns.
    pub const COLUMNS: usize = 7;

    /// Create a game with an empty board.
    pub fn new() -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(Self::ROWS, Self::COLUMNS)?,
        })
    }

    /// The row a piece dropped into `column` would land in, if the column has room.
    #[must_use]
    pub fn landing_row(&self, column: i32) -> Option<i32> {
        (0..self.board.rows() as i32)
            .rev()
            .find(|&row| self.board.get_cell(row, column) == Some(Cell::Empty))
    }

    fn run_from(&self, row: i32, column: i32, d_row: i32, d_col: i32, symbol: Symbol) -> bool {
        (0..RUN).all(|step| {
            self.board
                .get_cell(row + step * d_row, column + step * d_col)
                .is_some_and(|cell| cell.holds(symbol))
        })
    }
}

impl BoardGame for ConnectFour {
    fn kind(&self) -> GameKind {
        GameKind::ConnectFour
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn replace_board(&mut self, board: Board) -> Result<(), GameError> {
        ensure_dimensions(&board, Self::ROWS, Self::COLUMNS)?;
        self.board = board;
        Ok(())
    }

    /// The row is ignored: pieces always fall to the bottom of the column.
    fn is_valid_move(&self, _row: i32, column: i32, _symbol: Symbol) -> bool {
        self.landing_row(column).is_some()
    }

    fn make_move(&mut self, _row: i32, column: i32, symbol: Symbol) {
        if let Some(row) = self.landing_row(column) {
            debug!(row, column, %symbol, "piece dropped");
            self.board.set_cell(row, column, symbol);
        }
    }

    fn check_for_winner(&self, symbol: Symbol) -> bool {
        for row in 0..self.board.rows() as i32 {
            for column in 0..self.board.columns() as i32 {
                if DIRECTIONS
                    .iter()
                    .any(|&(d_row, d_col)| self.run_from(row, column, d_row, d_col, symbol))
                {
                    return true;
                }
            }
        }

        false
    }
}
