//! Computer player picking uniformly random legal moves.
//!
//! Row and column are sampled independently from the whole board until
//! the game accepts one. Once `max_random_attempts` samples have been
//! rejected the board is nearly full, so the remaining legal cells are
//! enumerated and one is picked uniformly. Both paths select uniformly
//! over the legal `(row, column)` pairs.

use tracing::{debug, instrument};

use crate::core::{GameError, GameRng, Symbol};
use crate::rules::BoardGame;

/// Random move selection with a bounded search.
#[derive(Clone, Debug)]
pub struct ComputerPlayer {
    rng: GameRng,
    max_random_attempts: usize,
}

impl ComputerPlayer {
    /// Create a computer player drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng, max_random_attempts: usize) -> Self {
        Self {
            rng,
            max_random_attempts,
        }
    }

    /// Rejected samples tolerated before enumerating.
    #[must_use]
    pub fn max_random_attempts(&self) -> usize {
        self.max_random_attempts
    }

    /// Pick a legal `(row, column)` for `symbol`.
    ///
    /// Fails with [`GameError::NoLegalMove`] if the game accepts no cell.
    #[instrument(skip(self, game), fields(seed = self.rng.seed()))]
    pub fn choose_move<G>(&mut self, game: &G, symbol: Symbol) -> Result<(i32, i32), GameError>
    where
        G: BoardGame + ?Sized,
    {
        let (rows, columns) = (game.rows(), game.columns());

        for _ in 0..self.max_random_attempts {
            let row = self.rng.gen_range_usize(0..rows) as i32;
            let column = self.rng.gen_range_usize(0..columns) as i32;

            if game.is_valid_move(row, column, symbol) {
                return Ok((row, column));
            }
        }

        let legal = game.legal_moves(symbol);
        debug!(remaining = legal.len(), "random search exhausted, enumerating");
        self.rng.choose(&legal).copied().ok_or(GameError::NoLegalMove)
    }
}
