//! Core engine types: board, players, status, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every rule variant.
//! Variants configure these rather than modifying the core.

pub mod board;
pub mod player;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use board::{Board, Cell, Symbol};
pub use player::PlayerId;
pub use rng::GameRng;
pub use config::{GameKind, GameMode, SessionConfig};
pub use state::{GameStatus, Snapshot};
pub use error::GameError;
