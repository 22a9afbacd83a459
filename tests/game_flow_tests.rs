//! Game Flow Integration Tests
//!
//! Full games driven through the pointer path:
//! - Selection transitions
//! - Promotion
//! - Checkmate and stalemate ending the session

use chesspeak::audio::ScriptedSpeech;
use chesspeak::core::GameSettings;
use chesspeak::game::{ChessEngine, ClickOutcome, GameOverState, GameSession, SessionStatus};
use chesspeak::input::SurfaceEvent;
use chesspeak::rendering::{RecordingHandle, RecordingSurface};
use shakmaty::{Color, Role, Square};

fn test_settings() -> GameSettings {
    GameSettings {
        frame_rate: 200,
        game_over_linger_ms: 0,
        ..GameSettings::default()
    }
}

fn new_session(
    engine: ChessEngine,
) -> (GameSession<RecordingSurface, ScriptedSpeech>, RecordingHandle) {
    let settings = test_settings();
    let (surface, handle) = RecordingSurface::new(settings.geometry());
    let (speech, _feed) = ScriptedSpeech::new();
    (GameSession::new(surface, speech, engine, settings), handle)
}

fn click(
    session: &mut GameSession<RecordingSurface, ScriptedSpeech>,
    square: Square,
) -> ClickOutcome {
    let (x, y) = test_settings().geometry().square_center(square);
    session
        .handle_event(SurfaceEvent::PointerClick {
            x: x as i32,
            y: y as i32,
        })
        .expect("click lands on the board")
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_select_then_reselect() {
    let (mut session, _handle) = new_session(ChessEngine::new());

    assert_eq!(click(&mut session, Square::E2), ClickOutcome::Selected(Square::E2));
    assert_eq!(click(&mut session, Square::G1), ClickOutcome::Reselected(Square::G1));
    let mut destinations = session.selection().destinations().to_vec();
    destinations.sort();
    assert_eq!(destinations, vec![Square::F3, Square::H3]);
}

#[test]
fn test_opponent_piece_does_not_select() {
    let (mut session, _handle) = new_session(ChessEngine::new());

    assert_eq!(click(&mut session, Square::E7), ClickOutcome::Cleared);
    assert!(!session.selection().is_selected());
}

#[test]
fn test_deselect_then_click_again() {
    //! Clicking the selected square clears it; a third click selects again
    let (mut session, _handle) = new_session(ChessEngine::new());

    click(&mut session, Square::D2);
    assert_eq!(click(&mut session, Square::D2), ClickOutcome::Deselected);
    assert!(!session.selection().is_selected());
    assert_eq!(click(&mut session, Square::D2), ClickOutcome::Selected(Square::D2));
}

#[test]
fn test_non_destination_clears() {
    let (mut session, _handle) = new_session(ChessEngine::new());

    click(&mut session, Square::E2);
    assert_eq!(click(&mut session, Square::E5), ClickOutcome::Cleared);
    assert_eq!(session.arbiter().turn(), Color::White);
}

// ============================================================================
// Move Tests
// ============================================================================

#[test]
fn test_opening_exchange() {
    let (mut session, handle) = new_session(ChessEngine::new());
    handle.play(Square::E2, Square::E4);
    handle.play(Square::E7, Square::E5);

    assert_eq!(session.tick(), SessionStatus::Running);
    assert_eq!(session.arbiter().history().movetext(), "1. e4 e5");
    assert_eq!(session.arbiter().turn(), Color::White);
}

#[test]
fn test_pointer_promotion_is_queen() {
    let engine = ChessEngine::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("valid fen");
    let (mut session, _handle) = new_session(engine);

    click(&mut session, Square::E7);
    let outcome = click(&mut session, Square::E8);

    assert!(matches!(outcome, ClickOutcome::Moved(_)));
    let piece = session
        .arbiter()
        .with_engine(|e| e.piece_at(Square::E8))
        .expect("promoted piece");
    assert_eq!(piece.role, Role::Queen);
    assert_eq!(piece.color, Color::White);
}

// ============================================================================
// Game End Tests
// ============================================================================

#[test]
fn test_scholars_mate_by_pointer() {
    let (session, handle) = new_session(ChessEngine::new());
    for (from, to) in [
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::F1, Square::C4),
        (Square::B8, Square::C6),
        (Square::D1, Square::H5),
        (Square::G8, Square::F6),
        (Square::H5, Square::F7),
    ] {
        handle.play(from, to);
    }

    let summary = session.run();

    assert_eq!(summary.result, "1-0");
    assert_eq!(summary.game_over, GameOverState::WhiteWon);
    assert_eq!(summary.plies, 7);
    assert_eq!(summary.pointer_moves, 7);
    assert_eq!(summary.voice_moves, 0);
    assert_eq!(summary.movetext, "1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7#");

    let last = handle.last_frame().expect("final frame");
    assert!(last.game_over.is_game_over());
    assert_eq!(last.selected, None);
}

#[test]
fn test_fools_mate_by_pointer() {
    let (session, handle) = new_session(ChessEngine::new());
    handle.play(Square::F2, Square::F3);
    handle.play(Square::E7, Square::E5);
    handle.play(Square::G2, Square::G4);
    handle.play(Square::D8, Square::H4);

    let summary = session.run();
    assert_eq!(summary.result, "0-1");
    assert_eq!(summary.message(), "Black wins by checkmate!");
}

#[test]
fn test_stalemate_is_draw() {
    let engine = ChessEngine::from_fen("k7/8/1K6/8/8/8/8/2Q5 w - - 0 1").expect("valid fen");
    let (session, handle) = new_session(engine);
    handle.play(Square::C1, Square::C7);

    let summary = session.run();
    assert_eq!(summary.result, "1/2-1/2");
    assert_eq!(summary.game_over, GameOverState::Stalemate);
}

#[test]
fn test_clicks_ignored_after_game_over() {
    let engine = ChessEngine::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("valid fen");
    let (mut session, _handle) = new_session(engine);

    assert_eq!(click(&mut session, Square::G8), ClickOutcome::Ignored);
    assert_eq!(session.tick(), SessionStatus::GameOver);
}

#[test]
fn test_quit_before_game_end() {
    let (session, handle) = new_session(ChessEngine::new());
    handle.play(Square::E2, Square::E4);
    handle.quit();

    let summary = session.run();
    assert!(summary.quit);
    assert_eq!(summary.result, "*");
    assert_eq!(summary.plies, 1);
}
