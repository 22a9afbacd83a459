//! Rendering module - the render/input surface seam
//!
//! The session does not draw anything itself. Once per tick it builds a
//! [`Frame`] from the live position and hands it to a [`BoardSurface`], which
//! also reports the raw events the player produced since the last poll.
//!
//! # Architecture
//!
//! - [`Frame`] - Everything a surface needs to draw one frame
//! - [`BoardSurface`] - Event source + frame sink
//! - `board` - Plain-text board drawing shared by text surfaces
//! - `recording` - In-memory surface driven by a handle, for tests

pub mod board;
pub mod recording;

pub use board::render_board;
pub use recording::{RecordingHandle, RecordingSurface};

use crate::audio::ListeningState;
use crate::game::resources::{ChessEngine, GameOverState, MoveRecord};
use crate::game::types::color_name;
use crate::input::{Orientation, SurfaceEvent};
use shakmaty::Square;

/// One frame's worth of display state
#[derive(Debug, Clone)]
pub struct Frame {
    /// Snapshot of the live position
    pub engine: ChessEngine,
    pub orientation: Orientation,
    pub selected: Option<Square>,
    /// Legal destinations of the selected piece
    pub destinations: Vec<Square>,
    pub listening: ListeningState,
    pub last_move: Option<MoveRecord>,
    pub game_over: GameOverState,
}

impl Frame {
    /// One-line summary shown under the board
    pub fn status_line(&self) -> String {
        if self.game_over.is_game_over() {
            return format!(
                "{} ({})",
                self.game_over.message(),
                self.game_over.result_string()
            );
        }
        let mut line = format!("{} to move", color_name(self.engine.turn()));
        if self.engine.is_check() {
            line.push_str(", check");
        }
        line.push_str(&format!(" | voice: {}", self.listening.label()));
        if let Some(last) = &self.last_move {
            line.push_str(&format!(" | last: {} ({})", last.san, last.source.label()));
        }
        line
    }

    /// Whether two frames would draw the same picture
    pub fn same_picture(&self, other: &Frame) -> bool {
        self.engine.ply() == other.engine.ply()
            && self.orientation == other.orientation
            && self.selected == other.selected
            && self.listening == other.listening
            && self.game_over == other.game_over
    }
}

/// A render/input surface driven by the session
pub trait BoardSurface {
    /// Events produced since the previous poll; never blocks
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;

    /// Draw one frame
    fn present(&mut self, frame: &Frame);
}
