//! Console command grammar.

use std::path::PathBuf;

/// A line typed at a human prompt that is not a bare number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// `MOVE <row> <col>`, 1-based. Connect Four ignores the row.
    Move {
        /// 1-based row.
        row: i32,
        /// 1-based column.
        column: i32,
    },
    /// Any other keyword.
    Command(Command),
}

/// A session command: everything but `MOVE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `UNDO`
    Undo,
    /// `REDO`
    Redo,
    /// `SAVE <path>`
    Save(PathBuf),
    /// `LOAD <path>`
    Load(PathBuf),
    /// `HELP`
    Help,
    /// `QUIT`
    Quit,
}

impl Directive {
    /// Parse a console line. Keywords are case-insensitive.
    ///
    /// Returns `None` for anything that is not well-formed, including bare
    /// numbers (those are answers to move prompts).
    ///
    /// ```
    /// use gamestation::console::{Command, Directive};
    ///
    /// assert_eq!(Directive::parse("undo"), Some(Directive::Command(Command::Undo)));
    /// assert_eq!(Directive::parse("MOVE 2 3"), Some(Directive::Move { row: 2, column: 3 }));
    /// assert_eq!(Directive::parse("4"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_uppercase().as_str() {
            "MOVE" => {
                let mut parts = rest.split_whitespace();
                let row = parts.next()?.parse().ok()?;
                let column = parts.next()?.parse().ok()?;
                if parts.next().is_some() {
                    return None;
                }
                return Some(Directive::Move { row, column });
            }
            "UNDO" if rest.is_empty() => Command::Undo,
            "REDO" if rest.is_empty() => Command::Redo,
            "HELP" if rest.is_empty() => Command::Help,
            "QUIT" if rest.is_empty() => Command::Quit,
            "SAVE" if !rest.is_empty() => Command::Save(PathBuf::from(rest)),
            "LOAD" if !rest.is_empty() => Command::Load(PathBuf::from(rest)),
            _ => return None,
        };

        Some(Directive::Command(command))
    }
}
