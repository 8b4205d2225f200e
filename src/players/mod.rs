//! Players: human or computer seats that produce turn input.
//!
//! ## Player
//!
//! Immutable identity (display name, symbol) plus a [`PlayerKind`]. The
//! kind set is closed, so every player can produce a move.
//!
//! ## Lineups
//!
//! [`lineup`] builds the standard two seats for a [`SessionConfig`]:
//! Connect Four uses `+`/`-`, SOS uses `S`/`O`.

mod computer;
mod human;

pub use computer::ComputerPlayer;

use tracing::{info, instrument};

use crate::console::{Command, Console};
use crate::core::{GameError, GameKind, GameMode, GameRng, SessionConfig, Symbol};
use crate::rules::BoardGame;

/// What a player handed back for its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnInput {
    /// Place the player's symbol at 0-based `(row, column)`.
    Move {
        /// 0-based row (ignored by Connect Four).
        row: i32,
        /// 0-based column.
        column: i32,
    },
    /// A console command other than `MOVE`.
    Command(Command),
}

/// How a seat chooses its moves.
#[derive(Clone, Debug)]
pub enum PlayerKind {
    /// Reads moves and commands from the console.
    Human,
    /// Picks random legal moves.
    Computer(ComputerPlayer),
}

/// A seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    symbol: Symbol,
    kind: PlayerKind,
}

impl Player {
    /// Create a human player.
    pub fn human(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
            kind: PlayerKind::Human,
        }
    }

    /// Create a computer player.
    pub fn computer(name: impl Into<String>, symbol: Symbol, computer: ComputerPlayer) -> Self {
        Self {
            name: name.into(),
            symbol,
            kind: PlayerKind::Computer(computer),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbol this player places.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// How this player chooses moves.
    #[must_use]
    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    /// Check if this seat is played from the console.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    /// Produce this player's input for the current turn.
    ///
    /// Humans may answer with a command instead of a move; computers
    /// always return a legal move.
    #[instrument(skip_all, fields(player = %self.name, symbol = %self.symbol))]
    pub fn next_input<G, C>(&mut self, game: &G, console: &mut C) -> Result<TurnInput, GameError>
    where
        G: BoardGame + ?Sized,
        C: Console + ?Sized,
    {
        match &mut self.kind {
            PlayerKind::Human => human::request_move(&self.name, self.symbol, game, console),
            PlayerKind::Computer(computer) => {
                let (row, column) = computer.choose_move(game, self.symbol)?;
                info!(row, column, "computer move");

                let message = match game.kind() {
                    GameKind::ConnectFour => format!("{} chose column {}.", self.name, column + 1),
                    GameKind::Sos => format!(
                        "{} chose row {} and column {}.",
                        self.name,
                        row + 1,
                        column + 1
                    ),
                };
                console.write_line(&message)?;

                Ok(TurnInput::Move { row, column })
            }
        }
    }
}

/// Build the two seats for `config`.
///
/// With a fixed seed each computer gets its own stream derived from the
/// seed and its name; otherwise computers are seeded from entropy.
pub fn lineup(config: &SessionConfig) -> Vec<Player> {
    let [first, second] = config.game.symbols();
    let computer = |name: &str| {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed).for_context(name),
            None => GameRng::from_entropy(),
        };
        ComputerPlayer::new(rng, config.max_random_attempts)
    };

    match config.mode {
        GameMode::HumanVsHuman => vec![
            Player::human("Player 1", first),
            Player::human("Player 2", second),
        ],
        GameMode::HumanVsComputer => vec![
            Player::human("Player 1", first),
            Player::computer("Computer", second, computer("Computer")),
        ],
        GameMode::ComputerVsComputer => vec![
            Player::computer("Computer 1", first, computer("Computer 1")),
            Player::computer("Computer 2", second, computer("Computer 2")),
        ],
    }
}
