//! Chess game logic module
//!
//! Everything between the input surfaces and the rules library.
//!
//! # Module Organization
//!
//! - `resources` - Position wrapper, selection, move history, game over state
//! - `systems` - Selection state machine driven by pointer clicks
//! - `arbiter` - Single serialization point for validate-then-apply
//! - `session` - Frame loop that owns the surface and the voice listener
//! - `types` - Move candidates and their source
//! - `error` - Game error taxonomy

pub mod arbiter;
pub mod error;
pub mod resources;
pub mod session;
pub mod systems;
pub mod types;

pub use arbiter::{Applied, Arbiter};
pub use error::{GameError, GameResult};
pub use resources::{ChessEngine, GameOverState, LegalMove, MoveHistory, MoveRecord, Selection};
pub use session::{GameSession, SessionStatus, SessionSummary};
pub use systems::{ClickAction, ClickOutcome};
pub use types::{MoveCandidate, MoveSource};
