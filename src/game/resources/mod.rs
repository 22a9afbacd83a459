//! Chess game resources - shared game state
//!
//! # Resource Categories
//!
//! ## Position
//! - [`ChessEngine`] - The move legality oracle and live position
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected piece and its legal destinations
//!
//! ## Game History
//! - [`MoveHistory`] - Every accepted move with the path that proposed it
//!
//! ## Game Status
//! - [`GameOverState`] - Win/loss/draw conditions

pub mod engine;
pub mod game_over;
pub mod history;
pub mod selection;

#[cfg(test)]
mod tests;

pub use engine::*;
pub use game_over::*;
pub use history::*;
pub use selection::*;
