//! Resource module unit tests
//!
//! Validates selection bookkeeping against the engine's legal move set
//! without going through the arbiter or a session.

use super::*;
use shakmaty::Square;

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_selection_default_is_empty() {
    //! Sessions begin with nothing selected
    let selection = Selection::default();

    assert_eq!(selection, Selection::NoSelection);
    assert!(!selection.is_selected());
    assert!(selection.destinations().is_empty());
    assert_eq!(selection.selected_square(), None);
}

#[test]
fn test_select_knight_from_start() {
    //! The b1 knight has exactly a3 and c3 available
    let engine = ChessEngine::new();
    let selection = Selection::select(&engine, Square::B1);

    assert_eq!(selection.selected_square(), Some(Square::B1));
    let mut destinations = selection.destinations().to_vec();
    destinations.sort();
    assert_eq!(destinations, vec![Square::A3, Square::C3]);
}

#[test]
fn test_select_pawn_from_start() {
    //! Pawns get single and double pushes
    let engine = ChessEngine::new();
    let selection = Selection::select(&engine, Square::E2);

    let mut destinations = selection.destinations().to_vec();
    destinations.sort();
    assert_eq!(destinations, vec![Square::E3, Square::E4]);
}

#[test]
fn test_select_blocked_piece_has_no_destinations() {
    //! The a1 rook is boxed in at the start
    let engine = ChessEngine::new();
    let selection = Selection::select(&engine, Square::A1);

    assert!(selection.is_selected());
    assert!(selection.destinations().is_empty());
}

#[test]
fn test_selection_clear() {
    let engine = ChessEngine::new();
    let mut selection = Selection::select(&engine, Square::G1);
    selection.clear();

    assert_eq!(selection, Selection::NoSelection);
}

// ============================================================================
// MoveHistory Tests
// ============================================================================

#[test]
fn test_history_starts_empty() {
    let history = MoveHistory::default();
    assert!(history.is_empty());
    assert!(history.last_move().is_none());
}
