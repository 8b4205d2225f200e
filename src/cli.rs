//! Command-line interface for gamestation.

use clap::Parser;
use gamestation::{GameKind, GameMode};
use std::path::PathBuf;

/// GameStation - Connect Four and SOS on the console
///
/// Flags that are not given are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "gamestation")]
#[command(about = "Play Connect Four or SOS against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[arg(short, long, value_enum)]
    pub game: Option<GameKind>,

    /// Who plays whom
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Load a saved game before starting
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Seed for computer players (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rejected random samples before a computer enumerates legal moves
    #[arg(long, default_value = "64")]
    pub max_random_attempts: usize,
}
