//! Closed set of rule variants.

use crate::core::{Board, GameError, GameKind, Symbol};
use crate::rules::BoardGame;

use super::connect_four::ConnectFour;
use super::sos::Sos;

/// One of the supported rule variants, chosen when a session is built.
#[derive(Clone, Debug)]
pub enum GameVariant {
    /// Connect Four.
    ConnectFour(ConnectFour),
    /// SOS.
    Sos(Sos),
}

impl GameVariant {
    /// Create a fresh game of the given kind.
    pub fn new(kind: GameKind) -> Result<Self, GameError> {
        Ok(match kind {
            GameKind::ConnectFour => GameVariant::ConnectFour(ConnectFour::new()?),
            GameKind::Sos => GameVariant::Sos(Sos::new()?),
        })
    }

    fn inner(&self) -> &dyn BoardGame {
        match self {
            GameVariant::ConnectFour(game) => game,
            GameVariant::Sos(game) => game,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BoardGame {
        match self {
            GameVariant::ConnectFour(game) => game,
            GameVariant::Sos(game) => game,
        }
    }
}

impl BoardGame for GameVariant {
    fn kind(&self) -> GameKind {
        self.inner().kind()
    }

    fn board(&self) -> &Board {
        self.inner().board()
    }

    fn replace_board(&mut self, board: Board) -> Result<(), GameError> {
        self.inner_mut().replace_board(board)
    }

    fn is_valid_move(&self, row: i32, column: i32, symbol: Symbol) -> bool {
        self.inner().is_valid_move(row, column, symbol)
    }

    fn make_move(&mut self, row: i32, column: i32, symbol: Symbol) {
        self.inner_mut().make_move(row, column, symbol);
    }

    fn check_for_winner(&self, symbol: Symbol) -> bool {
        self.inner().check_for_winner(symbol)
    }
}

impl From<ConnectFour> for GameVariant {
    fn from(game: ConnectFour) -> Self {
        GameVariant::ConnectFour(game)
    }
}

impl From<Sos> for GameVariant {
    fn from(game: Sos) -> Self {
        GameVariant::Sos(game)
    }
}
