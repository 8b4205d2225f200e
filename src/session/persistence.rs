//! Saved games.
//!
//! A save holds the board contents and whose turn it is. Paths ending in
//! `.json` are written as pretty JSON; anything else uses bincode.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

use crate::core::{Board, Cell, GameError, GameKind, PlayerId};
use crate::rules::BoardGame;

/// On-disk encoding of a save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    /// Human-readable JSON.
    Json,
    /// Compact bincode.
    Binary,
}

impl SaveFormat {
    /// Pick the format from the file extension.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SaveFormat::Json,
            _ => SaveFormat::Binary,
        }
    }
}

/// Serializable game position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Which variant was being played.
    pub game: GameKind,
    /// Board rows.
    pub rows: usize,
    /// Board columns.
    pub columns: usize,
    /// Row-major cell contents.
    pub cells: Vec<Cell>,
    /// Whose turn it is.
    pub current_player: PlayerId,
}

impl SavedGame {
    /// Capture the position of `game` with `current_player` to move.
    pub fn capture<G: BoardGame + ?Sized>(game: &G, current_player: PlayerId) -> Self {
        let board = game.board();
        Self {
            game: game.kind(),
            rows: board.rows(),
            columns: board.columns(),
            cells: board.cells().collect(),
            current_player,
        }
    }

    /// Rebuild the saved board.
    pub fn board(&self) -> Result<Board, GameError> {
        Board::from_cells(self.rows, self.columns, self.cells.clone())
    }

    /// Write to `path`, creating or truncating the file.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn write(&self, path: &Path) -> Result<(), GameError> {
        let format = SaveFormat::for_path(path);
        let mut writer = BufWriter::new(File::create(path)?);

        match format {
            SaveFormat::Json => serde_json::to_writer_pretty(&mut writer, self)?,
            SaveFormat::Binary => bincode::serialize_into(&mut writer, self)?,
        }
        writer.flush()?;

        debug!(?format, "game saved");
        Ok(())
    }

    /// Read from `path`.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn read(path: &Path) -> Result<Self, GameError> {
        let format = SaveFormat::for_path(path);
        let reader = BufReader::new(File::open(path)?);

        let saved = match format {
            SaveFormat::Json => serde_json::from_reader(reader)?,
            SaveFormat::Binary => bincode::deserialize_from(reader)?,
        };

        debug!(?format, "game read");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use crate::games::Sos;

    #[test]
    fn test_format_for_path() {
        assert_eq!(SaveFormat::for_path(Path::new("a.json")), SaveFormat::Json);
        assert_eq!(SaveFormat::for_path(Path::new("a.JSON")), SaveFormat::Json);
        assert_eq!(SaveFormat::for_path(Path::new("a.sav")), SaveFormat::Binary);
        assert_eq!(SaveFormat::for_path(Path::new("save")), SaveFormat::Binary);
    }

    #[test]
    fn test_capture() {
        let mut game = Sos::new().unwrap();
        game.make_move(1, 2, Symbol::new('O'));

        let saved = SavedGame::capture(&game, PlayerId::new(1));

        assert_eq!(saved.game, GameKind::Sos);
        assert_eq!((saved.rows, saved.columns), (3, 3));
        assert_eq!(saved.cells[5], Cell::Marked(Symbol::new('O')));
        assert_eq!(saved.board().unwrap(), *game.board());
    }

    #[test]
    fn test_write_and_read_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = Sos::new().unwrap();
        game.make_move(0, 0, Symbol::new('S'));
        let saved = SavedGame::capture(&game, PlayerId::new(1));

        for name in ["game.json", "game.bin"] {
            let path = dir.path().join(name);
            saved.write(&path).unwrap();
            assert_eq!(SavedGame::read(&path).unwrap(), saved);
        }

        let text = std::fs::read_to_string(dir.path().join("game.json")).unwrap();
        assert!(text.contains("\"game\": \"Sos\""));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SavedGame::read(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
