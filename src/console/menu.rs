//! Startup menus.
//!
//! Every menu falls back to its default on any answer other than the
//! listed numbers.

use std::path::PathBuf;

use super::Console;
use crate::core::{GameError, GameKind, GameMode};

/// How the session begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartChoice {
    /// Start from an empty board.
    New,
    /// Load a saved game first.
    Load(PathBuf),
}

/// Ask which game to play. `1` is Connect Four, anything else SOS.
pub fn select_game<C: Console + ?Sized>(console: &mut C) -> Result<GameKind, GameError> {
    console.write_line("Welcome to the GameStation!")?;
    console.write_line("Please select a game to begin the fun:")?;
    console.write_line("1. Connect Four")?;
    console.write_line("2. SOS")?;

    let choice = console.prompt("")?;
    Ok(GameKind::from_menu_choice(&choice))
}

/// Ask for the seat assignment. `1` is human vs human, anything else human vs computer.
pub fn select_mode<C: Console + ?Sized>(console: &mut C) -> Result<GameMode, GameError> {
    console.write_line("")?;
    console.write_line("Select game mode:")?;
    console.write_line("1. Human vs. Human")?;
    console.write_line("2. Human vs. Computer")?;

    let choice = console.prompt("")?;
    Ok(GameMode::from_menu_choice(&choice))
}

/// Ask whether to start fresh or load. `1` is new, anything else prompts for a path.
pub fn select_start<C: Console + ?Sized>(console: &mut C) -> Result<StartChoice, GameError> {
    console.write_line("Do you want to:")?;
    console.write_line("1. Start a new game")?;
    console.write_line("2. Load an existing game")?;

    if console.prompt("")?.trim() == "1" {
        return Ok(StartChoice::New);
    }

    let path = console.prompt("Enter the file path to load the game:\n")?;
    Ok(StartChoice::Load(PathBuf::from(path.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_select_game() {
        let mut console = ScriptedConsole::new(["1"]);
        assert_eq!(select_game(&mut console).unwrap(), GameKind::ConnectFour);
        assert!(console.output().contains("1. Connect Four"));

        let mut console = ScriptedConsole::new(["whatever"]);
        assert_eq!(select_game(&mut console).unwrap(), GameKind::Sos);
    }

    #[test]
    fn test_select_mode() {
        let mut console = ScriptedConsole::new(["1"]);
        assert_eq!(select_mode(&mut console).unwrap(), GameMode::HumanVsHuman);

        let mut console = ScriptedConsole::new(["3"]);
        assert_eq!(select_mode(&mut console).unwrap(), GameMode::HumanVsComputer);
    }

    #[test]
    fn test_select_start() {
        let mut console = ScriptedConsole::new(["1"]);
        assert_eq!(select_start(&mut console).unwrap(), StartChoice::New);

        let mut console = ScriptedConsole::new(["2", " saves/game.json "]);
        assert_eq!(
            select_start(&mut console).unwrap(),
            StartChoice::Load(PathBuf::from("saves/game.json"))
        );
    }

    #[test]
    fn test_menu_without_input() {
        let mut console = ScriptedConsole::default();
        assert!(matches!(select_game(&mut console), Err(GameError::InputClosed)));
    }
}
