//! Game over state tracking and result management
//!
//! Tracks end-game conditions (checkmate, stalemate, insufficient material)
//! and provides methods for determining game outcome and displaying results.
//!
//! # Game Over Conditions
//!
//! ## Checkmate
//! - **WhiteWon**: Black is in check with no legal moves
//! - **BlackWon**: White is in check with no legal moves
//!
//! ## Draw Conditions
//! - **Stalemate**: Side to move has no legal moves but is NOT in check
//! - **InsufficientMaterial**: Neither player can deliver checkmate (e.g., K vs K)
//!
//! Time control results do not exist here; games are untimed.

use crate::game::resources::ChessEngine;
use shakmaty::{Color, Outcome, Position};

/// The game's end state
///
/// Starts as `Playing` and transitions to a terminal state when the game ends.
///
/// ```text
/// Playing → WhiteWon / BlackWon / Stalemate / InsufficientMaterial
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won by checkmate
    WhiteWon,

    /// Black won by checkmate
    BlackWon,

    /// Draw by stalemate
    Stalemate,

    /// Draw by insufficient material
    InsufficientMaterial,
}

impl GameOverState {
    /// Classify the engine's current position
    pub fn from_engine(engine: &ChessEngine) -> Self {
        match engine.outcome() {
            None => GameOverState::Playing,
            Some(Outcome::Decisive {
                winner: Color::White,
            }) => GameOverState::WhiteWon,
            Some(Outcome::Decisive {
                winner: Color::Black,
            }) => GameOverState::BlackWon,
            Some(Outcome::Draw) if engine.position().is_insufficient_material() => {
                GameOverState::InsufficientMaterial
            }
            Some(Outcome::Draw) => GameOverState::Stalemate,
        }
    }

    /// Returns `true` for any non-Playing state
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable message describing the game result
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins by checkmate!",
            GameOverState::BlackWon => "Black wins by checkmate!",
            GameOverState::Stalemate => "Draw by stalemate",
            GameOverState::InsufficientMaterial => "Draw by insufficient material",
        }
    }

    /// Get the winner of the game, if there is one
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOverState::WhiteWon => Some(Color::White),
            GameOverState::BlackWon => Some(Color::Black),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            GameOverState::Stalemate | GameOverState::InsufficientMaterial
        )
    }

    /// PGN result token
    pub fn result_string(&self) -> &'static str {
        match self {
            GameOverState::Playing => "*",
            GameOverState::WhiteWon => "1-0",
            GameOverState::BlackWon => "0-1",
            GameOverState::Stalemate | GameOverState::InsufficientMaterial => "1/2-1/2",
        }
    }
}
