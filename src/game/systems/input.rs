//! Pointer click handling - the selection state machine
//!
//! Turns a click on a resolved square into a selection change or a move
//! submission. Transitions, evaluated against a fresh snapshot of the live
//! position:
//!
//! | Current            | Click on                     | Result                         |
//! |--------------------|------------------------------|--------------------------------|
//! | `NoSelection`      | piece of the side to move    | select it                      |
//! | `NoSelection`      | empty / opponent square      | stay `NoSelection`             |
//! | `PieceSelected(s)` | legal destination `d`        | submit `s→d`, clear if applied |
//! | `PieceSelected(s)` | `s` again                    | deselect                       |
//! | `PieceSelected(s)` | another friendly piece       | reselect                       |
//! | `PieceSelected(s)` | anything else                | clear                          |
//!
//! A pawn moved to the last rank is always promoted to a queen.

use crate::game::arbiter::{Applied, Arbiter};
use crate::game::resources::{ChessEngine, Selection};
use crate::game::types::{MoveCandidate, MoveSource};
use shakmaty::Square;
use tracing::debug;

/// What a click should do, decided against a position snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Select the piece on this square (fresh selection or reselect)
    Select(Square),
    /// Clicked the selected square again
    Deselect,
    /// Propose this move to the arbiter
    Submit(MoveCandidate),
    /// Drop any selection
    Clear,
}

/// Observable result of a click after arbitration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Square),
    Reselected(Square),
    Deselected,
    Cleared,
    /// Click ignored (game over)
    Ignored,
    Moved(Applied),
}

/// Decide the transition for a click on `clicked`
///
/// Pure: reads `engine` only, never mutates.
pub fn resolve_click(selection: &Selection, clicked: Square, engine: &ChessEngine) -> ClickAction {
    let Some(from) = selection.selected_square() else {
        return if engine.is_friendly(clicked) {
            ClickAction::Select(clicked)
        } else {
            ClickAction::Clear
        };
    };

    if let Some(piece) = engine.piece_at(from) {
        let candidate = MoveCandidate::auto_queen(piece.role, from, clicked);
        if engine.is_legal(&candidate) {
            return ClickAction::Submit(candidate);
        }
    }

    if clicked == from {
        ClickAction::Deselect
    } else if engine.is_friendly(clicked) {
        ClickAction::Select(clicked)
    } else {
        ClickAction::Clear
    }
}

/// Apply a click to `selection`, submitting moves through `arbiter`
///
/// The selection is cleared only when the arbiter accepts the move. A
/// rejected submission (the other input path moved first) falls back to the
/// reselect/clear rules against the live position.
pub fn handle_square_click(
    selection: &mut Selection,
    clicked: Square,
    arbiter: &Arbiter,
) -> ClickOutcome {
    let snapshot = arbiter.snapshot();
    if snapshot.is_terminal() {
        return ClickOutcome::Ignored;
    }

    let had_selection = selection.is_selected();
    match resolve_click(selection, clicked, &snapshot) {
        ClickAction::Select(square) => {
            *selection = Selection::select(&snapshot, square);
            debug!(
                "[INPUT] Selected {} ({} destinations)",
                square,
                selection.destinations().len()
            );
            if had_selection {
                ClickOutcome::Reselected(square)
            } else {
                ClickOutcome::Selected(square)
            }
        }
        ClickAction::Deselect => {
            selection.clear();
            debug!("[INPUT] Deselected {}", clicked);
            ClickOutcome::Deselected
        }
        ClickAction::Clear => {
            selection.clear();
            debug!("[INPUT] Selection cleared");
            ClickOutcome::Cleared
        }
        ClickAction::Submit(candidate) => match arbiter.submit(candidate, MoveSource::Pointer) {
            Ok(applied) => {
                selection.clear();
                ClickOutcome::Moved(applied)
            }
            Err(err) => {
                debug!("[INPUT] Move {} lost arbitration: {}", candidate, err);
                let live = arbiter.snapshot();
                if !live.is_terminal() && live.is_friendly(clicked) {
                    *selection = Selection::select(&live, clicked);
                    ClickOutcome::Reselected(clicked)
                } else {
                    selection.clear();
                    ClickOutcome::Cleared
                }
            }
        },
    }
}
