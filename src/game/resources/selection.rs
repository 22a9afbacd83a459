//! Selection resource for tracking the selected piece

use crate::game::resources::ChessEngine;
use shakmaty::Square;

/// Currently selected piece, if any
///
/// Recomputed on every click and never carried across an accepted move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    PieceSelected {
        square: Square,
        /// Squares the selected piece may legally move to
        destinations: Vec<Square>,
    },
}

impl Selection {
    /// Select the piece on `square`, computing its legal destinations
    pub fn select(engine: &ChessEngine, square: Square) -> Self {
        Selection::PieceSelected {
            square,
            destinations: engine.destinations_from(square),
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::NoSelection;
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::PieceSelected { .. })
    }

    pub fn selected_square(&self) -> Option<Square> {
        match self {
            Selection::NoSelection => None,
            Selection::PieceSelected { square, .. } => Some(*square),
        }
    }

    /// Legal destinations of the selected piece (empty when nothing is selected)
    pub fn destinations(&self) -> &[Square] {
        match self {
            Selection::NoSelection => &[],
            Selection::PieceSelected { destinations, .. } => destinations,
        }
    }
}
