//! Line-oriented console I/O.
//!
//! ## Console
//!
//! The session talks to people only through the [`Console`] trait:
//! - [`StdConsole`] wraps stdin/stdout for real play
//! - [`ScriptedConsole`] replays canned input lines and records output,
//!   for tests and unattended runs
//!
//! ## Commands
//!
//! Any human prompt also accepts the [`Directive`] grammar
//! (`MOVE`, `UNDO`, `REDO`, `SAVE`, `LOAD`, `HELP`, `QUIT`).

mod command;
mod help;
mod menu;

pub use command::{Command, Directive};
pub use help::{show_help, HELP_TEXT};
pub use menu::{select_game, select_mode, select_start, StartChoice};

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::core::GameError;

/// Text console a session reads from and writes to.
pub trait Console {
    /// Read one line without its trailing newline.
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, GameError>;

    /// Write text without a trailing newline (used for prompts).
    fn write(&mut self, text: &str) -> Result<(), GameError>;

    /// Write a line of text.
    fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        self.write(text)?;
        self.write("\n")
    }

    /// Write `prompt` and read the answer, failing if input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<String, GameError> {
        self.write(prompt)?;
        self.read_line()?.ok_or(GameError::InputClosed)
    }
}

/// Console backed by process stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a console on stdin/stdout.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        read_lossy_line(&mut io::stdin().lock())
    }

    fn write(&mut self, text: &str) -> Result<(), GameError> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Read one line, replacing invalid UTF-8 so a garbled answer is
/// rejected by the prompt instead of ending the session.
fn read_lossy_line<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<String>, GameError> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Console that replays scripted input and captures all output.
///
/// ```
/// use gamestation::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["1"]);
/// assert_eq!(console.prompt("Choice: ").unwrap(), "1");
/// assert!(console.read_line().unwrap().is_none());
/// assert_eq!(console.output(), "Choice: ");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    /// Create a console that will answer with `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of unread input lines.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        Ok(self.input.pop_front())
    }

    fn write(&mut self, text: &str) -> Result<(), GameError> {
        self.output.push_str(text);
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        (**self).read_line()
    }

    fn write(&mut self, text: &str) -> Result<(), GameError> {
        (**self).write(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_order() {
        let mut console = ScriptedConsole::new(["a", "b", "c"]);

        assert_eq!(console.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(console.remaining_input(), 2);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("c"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_fails_when_exhausted() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert!(matches!(console.prompt("> "), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_invalid_utf8_line_is_kept() {
        let mut input: &[u8] = b"\xff4\r\nQUIT\n";

        let line = read_lossy_line(&mut input).unwrap().unwrap();
        assert_eq!(line, "\u{FFFD}4");
        assert!(line.trim().parse::<i32>().is_err());

        assert_eq!(read_lossy_line(&mut input).unwrap().as_deref(), Some("QUIT"));
        assert_eq!(read_lossy_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_write_line() {
        let mut console = ScriptedConsole::default();
        console.write_line("hello").unwrap();
        console.write("x").unwrap();
        assert_eq!(console.output(), "hello\nx");
    }
}
