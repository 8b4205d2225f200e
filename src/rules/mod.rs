//! Board game trait for rule variants.
//!
//! Variants implement `BoardGame` to define:
//! - Legal moves for a symbol
//! - How moves modify the board
//! - Win conditions
//!
//! The session manager calls into `BoardGame` but never interprets
//! variant-specific concepts directly.

pub mod engine;

pub use engine::BoardGame;
pub(crate) use engine::ensure_dimensions;
