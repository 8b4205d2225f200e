//! Engine error types.

use derive_more::{Display, Error, From};

/// Errors raised by the game engine.
///
/// Invalid moves are not errors: players retry until the variant accepts
/// a move. These cover configuration, persistence and I/O failures.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Board dimensions must both be positive.
    #[display("invalid board dimensions {rows}x{columns}")]
    InvalidConfiguration {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },

    /// A session needs at least one player.
    #[display("a game session needs at least one player")]
    NoPlayers,

    /// A computer player was asked to move on a board with no legal cell.
    #[display("no legal move available")]
    NoLegalMove,

    /// A saved game does not fit the running session.
    #[display("incompatible save: {reason}")]
    IncompatibleSave {
        /// Why the save was rejected.
        reason: String,
    },

    /// Console input reached end of stream.
    #[display("console input closed")]
    InputClosed,

    /// Underlying I/O failure.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// JSON save file could not be read or written.
    #[display("JSON error: {_0}")]
    #[from]
    Json(serde_json::Error),

    /// Binary save file could not be read or written.
    #[display("binary encoding error: {_0}")]
    #[from]
    Bincode(bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::InvalidConfiguration { rows: 0, columns: 7 };
        assert_eq!(err.to_string(), "invalid board dimensions 0x7");

        let err = GameError::IncompatibleSave {
            reason: "wrong game".to_string(),
        };
        assert_eq!(err.to_string(), "incompatible save: wrong game");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
