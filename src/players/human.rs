//! Human player reading moves from the console.

use tracing::debug;

use super::TurnInput;
use crate::console::{Command, Console, Directive};
use crate::core::{GameError, GameKind, Symbol};
use crate::rules::BoardGame;

const INVALID_MOVE: &str = "Invalid move. Please try again.";

/// What one round of prompting produced.
enum Answer {
    Coordinates(i32, i32),
    Command(Command),
    Unreadable,
}

/// Prompt until the game accepts a move or the human types a command.
///
/// Coordinates are typed 1-based and returned 0-based. Connect Four only
/// asks for a column; the row is returned as `-1` and ignored by the rules.
pub(crate) fn request_move<G, C>(
    name: &str,
    symbol: Symbol,
    game: &G,
    console: &mut C,
) -> Result<TurnInput, GameError>
where
    G: BoardGame + ?Sized,
    C: Console + ?Sized,
{
    loop {
        console.write_line(&format!("It's {name}'s turn."))?;

        let (row, column) = match read_answer(game.kind(), console)? {
            Answer::Coordinates(row, column) => (row, column),
            Answer::Command(command) => return Ok(TurnInput::Command(command)),
            Answer::Unreadable => {
                console.write_line(INVALID_MOVE)?;
                continue;
            }
        };

        if game.is_valid_move(row, column, symbol) {
            match game.kind() {
                GameKind::ConnectFour => {
                    console.write_line(&format!("You chose column {}.", column + 1))?
                }
                GameKind::Sos => console.write_line(&format!(
                    "You chose row {} and column {}.",
                    row + 1,
                    column + 1
                ))?,
            }
            return Ok(TurnInput::Move { row, column });
        }

        debug!(player = name, row, column, "rejected move");
        console.write_line(INVALID_MOVE)?;
    }
}

fn read_answer<C: Console + ?Sized>(kind: GameKind, console: &mut C) -> Result<Answer, GameError> {
    match kind {
        GameKind::ConnectFour => {
            let column = match read_number(console, "Enter column: ")? {
                Ok(column) => column,
                Err(answer) => return Ok(answer),
            };
            Ok(Answer::Coordinates(-1, column))
        }
        GameKind::Sos => {
            let row = match read_number(console, "Enter row: ")? {
                Ok(row) => row,
                Err(answer) => return Ok(answer),
            };
            let column = match read_number(console, "Enter column: ")? {
                Ok(column) => column,
                Err(answer) => return Ok(answer),
            };
            Ok(Answer::Coordinates(row, column))
        }
    }
}

/// Read a 1-based number and return it 0-based, or the non-numeric
/// [`Answer`] the line turned out to be.
///
/// A `MOVE` typed at any prompt answers the whole turn.
fn read_number<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<Result<i32, Answer>, GameError> {
    let line = console.prompt(prompt)?;

    match Directive::parse(&line) {
        Some(Directive::Command(command)) => Ok(Err(Answer::Command(command))),
        Some(Directive::Move { row, column }) => Ok(Err(
            match (zero_based(row), zero_based(column)) {
                (Some(row), Some(column)) => Answer::Coordinates(row, column),
                _ => Answer::Unreadable,
            },
        )),
        None => Ok(line
            .trim()
            .parse()
            .ok()
            .and_then(zero_based)
            .ok_or(Answer::Unreadable)),
    }
}

fn zero_based(one_based: i32) -> Option<i32> {
    one_based.checked_sub(1)
}
