//! Error types for game module
//!
//! Provides custom error types for move arbitration and position setup.
//! None of these are fatal to a session: the pointer path resets or reselects,
//! the voice path logs and keeps listening.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Candidate is not legal in the live position
    #[error("Illegal move {uci}: {reason}")]
    IllegalMove { uci: String, reason: String },

    /// Position is already terminal, no further moves are accepted
    #[error("Game is already over")]
    GameOver,

    /// Starting position could not be built
    #[error("Invalid position: {message}")]
    InvalidPosition { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
