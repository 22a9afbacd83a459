//! Voice Pipeline Integration Tests
//!
//! Tests for the spoken-command path end to end:
//! - Commands reaching the position through the arbiter
//! - Recovery from unusable utterances
//! - Listener lifecycle (single worker, bounded stop, resume)

use chesspeak::audio::{
    ListeningState, ScriptedSpeech, SpeechFeed, SpeechService, Utterance, VoiceError,
    VoiceListener, VoiceResult,
};
use chesspeak::core::{GameSettings, VoiceSettings};
use chesspeak::game::{Arbiter, ChessEngine, GameSession, MoveSource, SessionStatus};
use chesspeak::rendering::{RecordingHandle, RecordingSurface};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use shakmaty::{Color, Square};
use std::thread;
use std::time::{Duration, Instant};

fn quick_voice() -> VoiceSettings {
    VoiceSettings {
        start_timeout_ms: 20,
        phrase_limit_ms: 20,
        stop_wait_ms: 1000,
    }
}

fn voice_session() -> (
    GameSession<RecordingSurface, ScriptedSpeech>,
    RecordingHandle,
    SpeechFeed,
) {
    let settings = GameSettings {
        frame_rate: 200,
        game_over_linger_ms: 0,
        voice: quick_voice(),
        ..GameSettings::default()
    };
    let (surface, handle) = RecordingSurface::new(settings.geometry());
    let (speech, feed) = ScriptedSpeech::new();
    let session = GameSession::new(surface, speech, ChessEngine::new(), settings);
    (session, handle, feed)
}

fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Microphone that blocks inside capture until the test releases it
struct StuckMicrophone {
    entered: Sender<()>,
    release: Receiver<String>,
}

impl SpeechService for StuckMicrophone {
    fn capture_utterance(&self, _start: Duration, _limit: Duration) -> VoiceResult<Utterance> {
        let _ = self.entered.send(());
        match self.release.recv() {
            Ok(text) => Ok(Utterance {
                audio: text.into_bytes(),
            }),
            Err(_) => Err(VoiceError::NoSpeechDetected),
        }
    }

    fn transcribe(&self, utterance: &Utterance) -> VoiceResult<String> {
        String::from_utf8(utterance.audio.clone()).map_err(|_| VoiceError::UnrecognizedAudio)
    }
}

fn stuck_listener(
    arbiter: Arbiter,
) -> (VoiceListener<StuckMicrophone>, Receiver<()>, Sender<String>) {
    let (entered_tx, entered_rx) = unbounded();
    let (release_tx, release_rx) = bounded(1);
    let microphone = StuckMicrophone {
        entered: entered_tx,
        release: release_rx,
    };
    (
        VoiceListener::new(microphone, arbiter, quick_voice()),
        entered_rx,
        release_tx,
    )
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn test_fools_mate_by_voice() {
    let (mut session, handle, feed) = voice_session();
    handle.toggle_listening();
    assert_eq!(session.tick(), SessionStatus::Running);
    for command in ["pawn to f3", "pawn to e5", "pawn to g4", "queen to h4"] {
        feed.say(command);
    }

    let summary = session.run();
    assert_eq!(summary.result, "0-1");
    assert_eq!(summary.voice_moves, 4);
    assert_eq!(summary.pointer_moves, 0);
    assert_eq!(summary.movetext, "1. f3 e5 2. g4 Qh4#");
    assert_eq!(summary.voice_stats.applied, 4);
    assert_eq!(summary.voice_stats.workers_spawned, 1);
}

#[test]
fn test_pointer_and_voice_share_one_game() {
    let (mut session, handle, feed) = voice_session();
    handle.play(Square::E2, Square::E4);
    handle.toggle_listening();
    assert_eq!(session.tick(), SessionStatus::Running);

    feed.say("Pawn to E 5");
    assert!(wait_for(|| session.arbiter().turn() == Color::White));

    let history = session.arbiter().history();
    assert_eq!(history.movetext(), "1. e4 e5");
    assert_eq!(history.count_by_source(MoveSource::Pointer), 1);
    assert_eq!(history.count_by_source(MoveSource::Voice), 1);
}

#[test]
fn test_unusable_utterances_are_skipped() {
    //! Silence, noise, outages and nonsense leave the position alone
    let arbiter = Arbiter::default();
    let (speech, feed) = ScriptedSpeech::new();
    let listener = VoiceListener::new(speech, arbiter.clone(), quick_voice());
    listener.start().expect("spawn");

    feed.mumble();
    feed.outage();
    feed.say("bishop to e9");
    feed.say("rook to a3");
    feed.say("knight to f3");

    assert!(wait_for(|| arbiter.turn() == Color::Black));
    assert_eq!(arbiter.history().movetext(), "1. Nf3");
    assert!(listener.stop(Duration::from_secs(2)));

    let stats = listener.stats();
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.rejected, 2);
}

#[test]
fn test_voice_ignored_while_off() {
    //! Speech heard while off is not replayed once listening starts
    let (mut session, handle, feed) = voice_session();
    feed.say("pawn to e4");
    session.tick();
    thread::sleep(Duration::from_millis(50));

    assert_eq!(session.arbiter().turn(), Color::White);
    assert_eq!(session.listener().state(), ListeningState::Off);

    handle.toggle_listening();
    session.tick();
    assert!(session.listener().state().is_listening());
    thread::sleep(Duration::from_millis(100));
    assert_eq!(session.arbiter().turn(), Color::White);
    assert_eq!(session.arbiter().with_engine(|e| e.ply()), 0);

    feed.say("pawn to d4");
    assert!(wait_for(|| session.arbiter().turn() == Color::Black));
    assert_eq!(session.arbiter().history().movetext(), "1. d4");
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[test]
fn test_start_twice_one_worker() {
    let (speech, _feed) = ScriptedSpeech::new();
    let listener = VoiceListener::new(speech, Arbiter::default(), quick_voice());

    assert!(listener.start().expect("spawn"));
    assert!(!listener.start().expect("already running"));
    assert_eq!(listener.stats().workers_spawned, 1);
    assert!(listener.stop(Duration::from_secs(2)));
}

#[test]
fn test_restart_after_stop_spawns_fresh_worker() {
    let (speech, _feed) = ScriptedSpeech::new();
    let listener = VoiceListener::new(speech, Arbiter::default(), quick_voice());

    listener.start().expect("spawn");
    assert!(listener.stop(Duration::from_secs(2)));
    assert!(!listener.is_running());
    assert!(listener.start().expect("spawn again"));
    assert_eq!(listener.stats().workers_spawned, 2);
    assert!(listener.stop(Duration::from_secs(2)));
}

#[test]
fn test_stop_is_bounded_while_capture_blocks() {
    let arbiter = Arbiter::default();
    let (listener, entered, release) = stuck_listener(arbiter.clone());
    listener.start().expect("spawn");
    entered.recv_timeout(Duration::from_secs(5)).expect("capture started");

    let started = Instant::now();
    assert!(!listener.stop(Duration::from_millis(100)));
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(listener.state(), ListeningState::StopRequested);

    // The utterance in flight when stop was requested is discarded
    release.send("pawn to e4".to_string()).expect("release");
    assert!(wait_for(|| listener.state() == ListeningState::Off));
    assert_eq!(arbiter.with_engine(|e| e.ply()), 0);
}

#[test]
fn test_start_during_pending_stop_resumes() {
    let arbiter = Arbiter::default();
    let (listener, entered, release) = stuck_listener(arbiter.clone());
    listener.start().expect("spawn");
    entered.recv_timeout(Duration::from_secs(5)).expect("capture started");

    assert!(listener.request_stop());
    assert!(!listener.start().expect("resume"));
    assert_eq!(listener.state(), ListeningState::Active);
    assert_eq!(listener.stats().workers_spawned, 1);

    release.send("pawn to e4".to_string()).expect("release");
    assert!(wait_for(|| arbiter.turn() == Color::Black));

    entered.recv_timeout(Duration::from_secs(5)).expect("listening again");
    listener.request_stop();
    drop(release);
    assert!(wait_for(|| listener.state() == ListeningState::Off));
}
