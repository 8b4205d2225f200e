//! Game sessions: the turn manager, its undo/redo history and saved games.

mod history;
mod manager;
mod persistence;

pub use history::History;
pub use manager::GameManager;
pub use persistence::{SaveFormat, SavedGame};
