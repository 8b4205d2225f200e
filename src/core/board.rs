//! Fixed-size game board.
//!
//! ## Board
//!
//! A `rows × columns` grid of [`Cell`]s stored row-major in an
//! `im::Vector`, so cloning a board for the undo history is O(1) and the
//! clone never aliases the live grid.
//!
//! ## Coordinates
//!
//! Coordinates are signed: rule variants probe neighbouring cells with
//! negative offsets and rely on out-of-range reads returning `None`
//! instead of panicking.
//!
//! ```
//! use gamestation::core::{Board, Cell, Symbol};
//!
//! let mut board = Board::new(3, 3).unwrap();
//! board.set_cell(1, 1, Symbol::new('S'));
//!
//! assert_eq!(board.get_cell(1, 1), Some(Cell::Marked(Symbol::new('S'))));
//! assert_eq!(board.get_cell(0, 0), Some(Cell::Empty));
//! assert_eq!(board.get_cell(-1, 0), None);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GameError;

/// Single-character marker a player places on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Get the raw character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a player's symbol.
    Marked(Symbol),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the symbol in this cell, if any.
    #[must_use]
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }

    /// Check if the cell holds `symbol`.
    #[must_use]
    pub fn holds(self, symbol: Symbol) -> bool {
        self == Cell::Marked(symbol)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Fixed-size grid of cells with bounds-checked access.
///
/// Not serializable on its own: saved games store the cells and rebuild
/// the board through [`Board::from_cells`], which checks the length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] if either dimension is
    /// zero or the cell count overflows.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        let len = cell_count(rows, columns)?;

        Ok(Self {
            rows,
            columns,
            cells: std::iter::repeat(Cell::Empty).take(len).collect(),
        })
    }

    /// Rebuild a board from row-major cell contents.
    ///
    /// The length is checked before anything is allocated.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, GameError> {
        let len = cell_count(rows, columns)?;
        if cells.len() != len {
            return Err(GameError::IncompatibleSave {
                reason: format!(
                    "expected {} cells for a {}x{} board, found {}",
                    len,
                    rows,
                    columns,
                    cells.len()
                ),
            });
        }

        Ok(Self {
            rows,
            columns,
            cells: cells.into_iter().collect(),
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check if `(row, column)` lies on the board.
    #[must_use]
    pub fn is_valid_cell(&self, row: i32, column: i32) -> bool {
        self.index(row, column).is_some()
    }

    /// Get the cell at `(row, column)`, or `None` if out of bounds.
    #[must_use]
    pub fn get_cell(&self, row: i32, column: i32) -> Option<Cell> {
        self.index(row, column).map(|i| self.cells[i])
    }

    /// Place `symbol` at `(row, column)`.
    ///
    /// Out-of-bounds writes are ignored.
    pub fn set_cell(&mut self, row: i32, column: i32, symbol: Symbol) {
        if let Some(i) = self.index(row, column) {
            self.cells.set(i, Cell::Marked(symbol));
        }
    }

    /// Check if every cell holds a symbol.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterate over cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Render the board as console text.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn index(&self, row: i32, column: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }
}

fn cell_count(rows: usize, columns: usize) -> Result<usize, GameError> {
    rows.checked_mul(columns)
        .filter(|&len| len > 0)
        .ok_or(GameError::InvalidConfiguration { rows, columns })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(self.columns * 4 - 1);

        for row in 0..self.rows {
            let line: Vec<String> = (0..self.columns)
                .map(|col| self.cells[row * self.columns + col].to_string())
                .collect();
            writeln!(f, "{}", line.join(" | "))?;

            if row + 1 < self.rows {
                writeln!(f, "{separator}")?;
            }
        }

        Ok(())
    }
}
