//! Static help text.

use super::Console;
use crate::core::GameError;

/// Help listing for the console command grammar.
pub const HELP_TEXT: &str = "\
Welcome to the Help Section.
---------------------------
Here are some basic commands and their usage:
MOVE <row> <column> - To make a move at a given row and column.
UNDO - To undo the last move.
REDO - To redo the last undone move.
SAVE <file_path> - To save the current game state to a file.
LOAD <file_path> - To load a game state from a file.
HELP - To show this help.
QUIT - To quit the game.
Note: Replace <row>, <column>, and <file_path> with actual values.
At a move prompt you may also just type the number asked for.";

/// Print the help text.
pub fn show_help<C: Console + ?Sized>(console: &mut C) -> Result<(), GameError> {
    console.write_line(HELP_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_help_lists_every_command() {
        let mut console = ScriptedConsole::default();
        show_help(&mut console).unwrap();

        for keyword in ["MOVE", "UNDO", "REDO", "SAVE", "LOAD", "HELP", "QUIT"] {
            assert!(console.output().contains(keyword), "missing {keyword}");
        }
    }
}
