//! Move arbitration - the single serialization point for the live position
//!
//! Both input paths hold a clone of the same [`Arbiter`]. Every mutation goes
//! through [`Arbiter::submit`], which re-validates the candidate against the
//! live position and applies it under one lock acquisition, so
//! validate-then-apply is atomic with respect to the other path.
//!
//! Readers take a [`ChessEngine`] snapshot instead of holding the lock. The
//! voice worker never holds the lock while capturing or transcribing.

use crate::game::error::{GameError, GameResult};
use crate::game::resources::{ChessEngine, GameOverState, LegalMove, MoveHistory, MoveRecord};
use crate::game::types::{color_name, MoveCandidate, MoveSource};
use parking_lot::Mutex;
use shakmaty::{Color, Outcome};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub candidate: MoveCandidate,
    pub source: MoveSource,
    pub san: String,
    /// Ply number after the move
    pub ply: u32,
    /// Whether the move ended the game
    pub terminal: bool,
}

#[derive(Debug, Default)]
struct Table {
    engine: ChessEngine,
    history: MoveHistory,
}

/// Shared handle to the live position
#[derive(Debug, Clone, Default)]
pub struct Arbiter {
    table: Arc<Mutex<Table>>,
}

impl Arbiter {
    pub fn new(engine: ChessEngine) -> Self {
        Self {
            table: Arc::new(Mutex::new(Table {
                engine,
                history: MoveHistory::default(),
            })),
        }
    }

    /// Re-validate and apply one candidate
    ///
    /// Exactly one candidate is applied per call. A candidate that was legal
    /// when proposed but no longer is (the other path moved first) comes back
    /// as [`GameError::IllegalMove`] and the position is left untouched.
    pub fn submit(&self, candidate: MoveCandidate, source: MoveSource) -> GameResult<Applied> {
        let mut table = self.table.lock();
        let mover = table.engine.turn();
        let san = match table.engine.apply(&candidate) {
            Ok(san) => san,
            Err(err) => {
                debug!(
                    "[ARBITER] Rejected {} from {}: {}",
                    candidate,
                    source.label(),
                    err
                );
                return Err(err);
            }
        };
        let ply = table.engine.ply();
        let terminal = table.engine.is_terminal();
        table.history.add_move(MoveRecord {
            ply,
            san: san.clone(),
            candidate,
            source,
        });
        drop(table);

        info!(
            "[ARBITER] {} played {} ({}) via {}",
            color_name(mover),
            san,
            candidate,
            source.label()
        );
        Ok(Applied {
            candidate,
            source,
            san,
            ply,
            terminal,
        })
    }

    /// Independent copy of the live position
    pub fn snapshot(&self) -> ChessEngine {
        self.table.lock().engine.clone()
    }

    /// Run a read-only closure against the live position
    ///
    /// Keep the closure short; the other input path waits on it.
    pub fn with_engine<R>(&self, f: impl FnOnce(&ChessEngine) -> R) -> R {
        f(&self.table.lock().engine)
    }

    pub fn legal_moves(&self) -> Vec<LegalMove> {
        self.with_engine(ChessEngine::legal_moves)
    }

    pub fn turn(&self) -> Color {
        self.with_engine(ChessEngine::turn)
    }

    pub fn is_terminal(&self) -> bool {
        self.with_engine(ChessEngine::is_terminal)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.with_engine(ChessEngine::outcome)
    }

    pub fn game_over_state(&self) -> GameOverState {
        self.with_engine(GameOverState::from_engine)
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.table.lock().history.last_move().cloned()
    }

    pub fn history(&self) -> MoveHistory {
        self.table.lock().history.clone()
    }

    /// `Err(GameOver)` once the position is terminal
    pub fn ensure_playing(&self) -> GameResult<()> {
        if self.is_terminal() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
