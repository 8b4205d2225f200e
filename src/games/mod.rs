//! Rule variants.
//!
//! - `connect_four`: gravity-fill four-in-a-row on a 6x7 board
//! - `sos`: spell S-O-S on a 3x3 board
//! - `variant`: the closed `GameVariant` enum a session is built around

pub mod connect_four;
pub mod sos;
mod variant;

pub use connect_four::ConnectFour;
pub use sos::Sos;
pub use variant::GameVariant;
