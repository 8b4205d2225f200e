//! Session configuration types.
//!
//! A session is configured at startup by choosing:
//! - `GameKind`: which rule variant to play
//! - `GameMode`: which seats are human and which are computer
//! - `SessionConfig`: the above plus RNG seeding and computer search bounds

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::board::Symbol;

/// Which rule variant a session plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum GameKind {
    /// Gravity-fill four-in-a-row on a 6x7 board.
    ConnectFour,
    /// Form the letters S-O-S in a line on a 3x3 board.
    Sos,
}

impl GameKind {
    /// Interpret the startup menu answer. `"1"` is Connect Four, anything else SOS.
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => GameKind::ConnectFour,
            _ => GameKind::Sos,
        }
    }

    /// Board dimensions as `(rows, columns)`.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            GameKind::ConnectFour => (6, 7),
            GameKind::Sos => (3, 3),
        }
    }

    /// Symbols for the first and second seat.
    #[must_use]
    pub const fn symbols(self) -> [Symbol; 2] {
        match self {
            GameKind::ConnectFour => [Symbol::new('+'), Symbol::new('-')],
            GameKind::Sos => [Symbol::new('S'), Symbol::new('O')],
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameKind::ConnectFour => write!(f, "Connect Four"),
            GameKind::Sos => write!(f, "SOS"),
        }
    }
}

/// Which seats are human and which are computer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum GameMode {
    /// Two humans sharing the console.
    HumanVsHuman,
    /// Human in the first seat, computer in the second.
    #[default]
    HumanVsComputer,
    /// Two computers, for unattended play.
    ComputerVsComputer,
}

impl GameMode {
    /// Interpret the startup menu answer. `"1"` is human vs human, anything else human vs computer.
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => GameMode::HumanVsHuman,
            _ => GameMode::HumanVsComputer,
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rule variant to play.
    pub game: GameKind,

    /// Seat assignment.
    pub mode: GameMode,

    /// Seed for computer players. `None` seeds from entropy.
    /// Each computer seat derives its own stream from this seed.
    pub seed: Option<u64>,

    /// Rejected random samples a computer tolerates before it enumerates
    /// the remaining legal cells and picks uniformly among them.
    pub max_random_attempts: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameKind::Sos,
            mode: GameMode::HumanVsComputer,
            seed: None,
            max_random_attempts: 64,
        }
    }
}

impl SessionConfig {
    /// Create a config for the given game with default settings.
    pub fn new(game: GameKind) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    /// Set the seat assignment.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set a fixed seed for reproducible computer play.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the rejection-sampling bound for computer players.
    pub fn with_max_random_attempts(mut self, attempts: usize) -> Self {
        self.max_random_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices_default_on_else() {
        assert_eq!(GameKind::from_menu_choice("1"), GameKind::ConnectFour);
        assert_eq!(GameKind::from_menu_choice(" 1\n"), GameKind::ConnectFour);
        assert_eq!(GameKind::from_menu_choice("2"), GameKind::Sos);
        assert_eq!(GameKind::from_menu_choice("chess"), GameKind::Sos);

        assert_eq!(GameMode::from_menu_choice("1"), GameMode::HumanVsHuman);
        assert_eq!(GameMode::from_menu_choice("2"), GameMode::HumanVsComputer);
        assert_eq!(GameMode::from_menu_choice(""), GameMode::HumanVsComputer);
    }

    #[test]
    fn test_dimensions_and_symbols() {
        assert_eq!(GameKind::ConnectFour.dimensions(), (6, 7));
        assert_eq!(GameKind::Sos.dimensions(), (3, 3));
        assert_eq!(GameKind::Sos.symbols(), [Symbol::new('S'), Symbol::new('O')]);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new(GameKind::ConnectFour)
            .with_mode(GameMode::ComputerVsComputer)
            .with_seed(7)
            .with_max_random_attempts(10);

        assert_eq!(config.game, GameKind::ConnectFour);
        assert_eq!(config.mode, GameMode::ComputerVsComputer);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_random_attempts, 10);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
