//! Turn manager.
//!
//! Owns the rule variant, the seats, whose turn it is, the undo/redo
//! history and the console, and drives the play loop:
//!
//! 1. Ask the current player for input
//! 2. On a move: snapshot, apply, render, check for a winner, check for a tie
//! 3. Otherwise hand the turn to the next seat
//!
//! Human commands (`UNDO`, `SAVE`, ...) are handled between steps 1 and 2.
//! Save/load/undo/redo failures are reported on the console and never end
//! the session.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use super::history::History;
use super::persistence::SavedGame;
use crate::console::{show_help, Command, Console};
use crate::core::{GameError, GameStatus, PlayerId, SessionConfig, Snapshot};
use crate::games::GameVariant;
use crate::players::{lineup, Player, TurnInput};
use crate::rules::BoardGame;

/// Drives one game session.
pub struct GameManager<C: Console> {
    game: GameVariant,
    players: Vec<Player>,
    current: PlayerId,
    status: GameStatus,
    history: History,
    console: C,
}

impl<C: Console> GameManager<C> {
    /// Create a session. The first player moves first.
    pub fn new(game: GameVariant, players: Vec<Player>, console: C) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        assert!(players.len() <= 255, "At most 255 players supported");

        Ok(Self {
            game,
            players,
            current: PlayerId::default(),
            status: GameStatus::NotStarted,
            history: History::new(),
            console,
        })
    }

    /// Create a session with the standard lineup for `config`.
    pub fn from_config(config: &SessionConfig, console: C) -> Result<Self, GameError> {
        let game = GameVariant::new(config.game)?;
        Self::new(game, lineup(config), console)
    }

    // === Accessors ===

    /// The rule variant being played.
    #[must_use]
    pub fn game(&self) -> &GameVariant {
        &self.game
    }

    /// All seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// Where the session is in its lifecycle.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if a move can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if an undone move can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The console.
    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// The console, mutably.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Give back the console.
    pub fn into_console(self) -> C {
        self.console
    }

    // === Turn Order ===

    /// Hand the turn to the next seat, wrapping after the last.
    pub fn switch_turn(&mut self) {
        self.current = self.current.next(self.players.len());
    }

    /// Check if no seat has a legal move left.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players
            .iter()
            .all(|player| !self.game.has_legal_move(player.symbol()))
    }

    // === Play Loop ===

    /// Play turns until the session ends.
    #[instrument(skip(self), fields(game = %self.game.kind()))]
    pub fn start_game(&mut self) -> Result<GameStatus, GameError> {
        self.console.write_line("Game Started!")?;
        self.print_board()?;

        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Playing;
        }

        while !self.status.is_terminal() {
            self.play_turn()?;
        }

        info!(status = ?self.status, "game finished");
        Ok(self.status)
    }

    /// Play one turn of the current player.
    ///
    /// Commands that do not end the turn (`SAVE`, `HELP`, failed `LOAD`)
    /// re-prompt the same player.
    pub fn play_turn(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        self.status = GameStatus::Playing;

        if self.is_game_over() {
            return self.declare_tie();
        }

        let index = self.current.index();
        if !self.game.has_legal_move(self.players[index].symbol()) {
            let name = self.players[index].name().to_string();
            warn!(player = %name, "no legal move, passing");
            self.console.write_line(&format!("{name} has no legal move and passes."))?;
            self.switch_turn();
            return Ok(self.status);
        }

        loop {
            let input = self.players[index].next_input(&self.game, &mut self.console)?;

            let command = match input {
                TurnInput::Move { row, column } => return self.apply_move(row, column),
                TurnInput::Command(command) => command,
            };

            match command {
                Command::Undo => {
                    self.undo_turn()?;
                    return Ok(self.status);
                }
                Command::Redo => {
                    self.redo_turn()?;
                    return Ok(self.status);
                }
                Command::Save(path) => match self.save_game(&path) {
                    Ok(()) => self
                        .console
                        .write_line(&format!("Game saved to {}.", path.display()))?,
                    Err(err) => self.report_failure("save", &err)?,
                },
                Command::Load(path) => match self.load_game(&path) {
                    Ok(()) => return Ok(self.status),
                    Err(err) => self.report_failure("load", &err)?,
                },
                Command::Help => show_help(&mut self.console)?,
                Command::Quit => {
                    info!(player = %self.players[index].name(), "player quit");
                    self.status = GameStatus::Abandoned;
                    self.console.write_line("Game abandoned.")?;
                    return Ok(self.status);
                }
            }
        }
    }

    /// Place the current player's symbol at 0-based `(row, column)`.
    ///
    /// An illegal move is reported and leaves everything unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: i32, column: i32) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let symbol = self.current_player().symbol();
        if !self.game.is_valid_move(row, column, symbol) {
            warn!(%symbol, "illegal move ignored");
            self.console.write_line("Invalid move. Please try again.")?;
            return Ok(self.status);
        }

        self.history
            .record(Snapshot::new(self.game.board().clone(), self.current));
        debug!(depth = self.history.undo_depth(), "move recorded");
        self.game.make_move(row, column, symbol);
        self.status = GameStatus::Playing;
        self.print_board()?;

        if self.game.check_for_winner(symbol) {
            let name = self.current_player().name().to_string();
            info!(winner = %name, "game won");
            self.status = GameStatus::Won(self.current);
            self.console.write_line(&format!("{name} has won!"))?;
            return Ok(self.status);
        }

        if self.is_game_over() {
            return self.declare_tie();
        }

        self.switch_turn();
        Ok(self.status)
    }

    // === History ===

    /// Undo one move. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, GameError> {
        let current = Snapshot::new(self.game.board().clone(), self.current);
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Redo one undone move. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool, GameError> {
        let current = Snapshot::new(self.game.board().clone(), self.current);
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// `UNDO` command: step back until a human is to move again.
    fn undo_turn(&mut self) -> Result<(), GameError> {
        if !self.undo()? {
            return self.console.write_line("Nothing to undo.");
        }
        while !self.current_player().is_human() && self.history.can_undo() {
            self.undo()?;
        }

        self.console.write_line("Move undone.")?;
        self.print_board()
    }

    /// `REDO` command: step forward past computer turns.
    fn redo_turn(&mut self) -> Result<(), GameError> {
        if !self.redo()? {
            return self.console.write_line("Nothing to redo.");
        }
        while !self.current_player().is_human()
            && !self.status.is_terminal()
            && self.history.can_redo()
        {
            self.redo()?;
        }

        self.console.write_line("Move redone.")?;
        self.print_board()?;
        self.announce_result()
    }

    fn restore(&mut self, snapshot: Snapshot) -> Result<(), GameError> {
        let (board, player) = snapshot.into_parts();
        self.game.replace_board(board)?;
        self.current = player;
        self.refresh_status();
        Ok(())
    }

    /// Recompute the status from the board after it was swapped in.
    ///
    /// A won position keeps the winner as the current seat, so only the
    /// current seat's symbol needs checking.
    fn refresh_status(&mut self) {
        let symbol = self.current_player().symbol();
        self.status = if self.game.check_for_winner(symbol) {
            GameStatus::Won(self.current)
        } else if self.is_game_over() {
            GameStatus::Tied
        } else {
            GameStatus::Playing
        };
    }

    // === Persistence ===

    /// Save the board and whose turn it is to `path`.
    pub fn save_game(&self, path: &Path) -> Result<(), GameError> {
        SavedGame::capture(&self.game, self.current).write(path)?;
        info!(path = %path.display(), "game saved");
        Ok(())
    }

    /// Load a saved position from `path`. Clears the undo/redo history.
    ///
    /// The save must be for the same variant, with the same board size and
    /// a seat that exists in this session.
    pub fn load_game(&mut self, path: &Path) -> Result<(), GameError> {
        let saved = SavedGame::read(path)?;

        if saved.game != self.game.kind() {
            return Err(GameError::IncompatibleSave {
                reason: format!("save is for {}, this session plays {}", saved.game, self.game.kind()),
            });
        }
        if saved.current_player.index() >= self.players.len() {
            return Err(GameError::IncompatibleSave {
                reason: format!("save names {} but only {} players are seated", saved.current_player, self.players.len()),
            });
        }

        if (saved.rows, saved.columns) != (self.game.rows(), self.game.columns()) {
            return Err(GameError::IncompatibleSave {
                reason: format!(
                    "save has a {}x{} board, this session plays on {}x{}",
                    saved.rows,
                    saved.columns,
                    self.game.rows(),
                    self.game.columns()
                ),
            });
        }

        self.game.replace_board(saved.board()?)?;
        self.current = saved.current_player;
        self.history.clear();
        self.refresh_status();

        info!(path = %path.display(), "game loaded");
        self.console
            .write_line(&format!("Game loaded from {}.", path.display()))?;
        self.print_board()?;
        self.announce_result()
    }

    // === Output ===

    /// Print the help text.
    pub fn show_help(&mut self) -> Result<(), GameError> {
        show_help(&mut self.console)
    }

    /// Print the board.
    pub fn print_board(&mut self) -> Result<(), GameError> {
        let rendered = self.game.print_board();
        self.console.write(&rendered)
    }

    fn declare_tie(&mut self) -> Result<GameStatus, GameError> {
        info!("no legal moves left");
        self.status = GameStatus::Tied;
        self.console.write_line("It's a tie!")?;
        Ok(self.status)
    }

    fn announce_result(&mut self) -> Result<(), GameError> {
        if let Some(winner) = self.status.winner() {
            let message = format!("{} has won!", self.players[winner.index()].name());
            return self.console.write_line(&message);
        }
        if self.status == GameStatus::Tied {
            return self.console.write_line("It's a tie!");
        }
        Ok(())
    }

    fn report_failure(&mut self, action: &str, err: &GameError) -> Result<(), GameError> {
        warn!(%err, action, "command failed");
        self.console.write_line(&format!("Could not {action} game: {err}"))
    }
}
