//! # gamestation
//!
//! A text-console station for turn-based board games, played by humans
//! or random computer players.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Core**: The board, players and turn manager never
//!    interpret a game's rules. Variants implement `BoardGame`.
//!
//! 2. **Closed Sets**: Variants (`GameVariant`) and player kinds
//!    (`PlayerKind`) are enums chosen at session construction.
//!
//! 3. **Cheap History**: Boards are `im` persistent vectors, so every move
//!    can be snapshotted for undo/redo without copying the grid.
//!
//! ## Modules
//!
//! - `core`: Board, symbols, player IDs, status, RNG, configuration, errors
//! - `rules`: `BoardGame` trait for variant implementations
//! - `games`: Connect Four and SOS
//! - `players`: Human and computer seats
//! - `console`: Console I/O, startup menus, command grammar, help
//! - `session`: Turn manager, undo/redo history, saved games

pub mod core;
pub mod rules;
pub mod games;
pub mod players;
pub mod console;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Symbol,
    PlayerId, GameRng,
    GameKind, GameMode, SessionConfig,
    GameStatus, Snapshot, GameError,
};

pub use crate::rules::BoardGame;

pub use crate::games::{ConnectFour, Sos, GameVariant};

pub use crate::players::{Player, PlayerKind, ComputerPlayer, TurnInput, lineup};

pub use crate::console::{Console, StdConsole, ScriptedConsole, Command, Directive, StartChoice};

pub use crate::session::{GameManager, History, SavedGame, SaveFormat};
