//! Game session - the primary-thread frame loop
//!
//! A [`GameSession`] owns the surface, the pointer selection and the voice
//! listener, and shares the [`Arbiter`] with the listener's worker. Each
//! [`tick`](GameSession::tick):
//!
//! 1. drains surface events (clicks, listening toggle, quit)
//! 2. checks whether the position is terminal
//! 3. presents a [`Frame`] built from a fresh snapshot
//!
//! When the game ends the listener is stopped with a bounded wait, the result
//! is announced and the final frame stays up for `game_over_linger_ms`.

use crate::audio::{ListenerStatsSnapshot, SpeechService, VoiceListener};
use crate::core::GameSettings;
use crate::game::arbiter::Arbiter;
use crate::game::resources::{ChessEngine, GameOverState, Selection};
use crate::game::systems::{handle_square_click, ClickOutcome};
use crate::game::types::{color_name, MoveSource};
use crate::input::{BoardGeometry, SurfaceEvent};
use crate::rendering::{BoardSurface, Frame};
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where the session stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    QuitRequested,
    GameOver,
}

/// What [`GameSession::run`] reports once the loop ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// "1-0", "0-1", "1/2-1/2", or "*" when the players quit
    pub result: String,
    pub game_over: GameOverState,
    pub plies: u32,
    pub pointer_moves: usize,
    pub voice_moves: usize,
    pub movetext: String,
    /// Listener counters at the end of the session
    pub voice_stats: ListenerStatsSnapshot,
    pub quit: bool,
}

impl SessionSummary {
    pub fn message(&self) -> &'static str {
        if self.quit && !self.game_over.is_game_over() {
            "Game abandoned"
        } else {
            self.game_over.message()
        }
    }
}

/// One game between two players sharing a board and a microphone
pub struct GameSession<S: BoardSurface, V: SpeechService> {
    surface: S,
    arbiter: Arbiter,
    listener: VoiceListener<V>,
    selection: Selection,
    geometry: BoardGeometry,
    settings: GameSettings,
    quit_requested: bool,
}

impl<S: BoardSurface, V: SpeechService> GameSession<S, V> {
    pub fn new(surface: S, speech: V, engine: ChessEngine, settings: GameSettings) -> Self {
        let arbiter = Arbiter::new(engine);
        let listener = VoiceListener::new(speech, arbiter.clone(), settings.voice.clone());
        Self {
            surface,
            geometry: settings.geometry(),
            arbiter,
            listener,
            selection: Selection::default(),
            settings,
            quit_requested: false,
        }
    }

    /// Shared handle to the live position
    pub fn arbiter(&self) -> &Arbiter {
        &self.arbiter
    }

    pub fn listener(&self) -> &VoiceListener<V> {
        &self.listener
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// React to one surface event
    ///
    /// Returns the click outcome for pointer events that landed on the board.
    pub fn handle_event(&mut self, event: SurfaceEvent) -> Option<ClickOutcome> {
        match event {
            SurfaceEvent::PointerClick { x, y } => {
                let Some(square) = self.geometry.square_at(x, y) else {
                    debug!("[INPUT] Click at ({}, {}) is off the board", x, y);
                    return None;
                };
                let outcome = handle_square_click(&mut self.selection, square, &self.arbiter);
                if let ClickOutcome::Moved(applied) = &outcome {
                    if applied.terminal {
                        self.listener.request_stop();
                    }
                }
                Some(outcome)
            }
            SurfaceEvent::ToggleListening => {
                if self.arbiter.is_terminal() {
                    debug!("[SESSION] Game over, listening toggle ignored");
                    return None;
                }
                if let Err(err) = self.listener.toggle() {
                    warn!("[SESSION] Could not toggle listening: {}", err);
                }
                None
            }
            SurfaceEvent::Quit => {
                info!("[SESSION] Quit requested");
                self.quit_requested = true;
                None
            }
        }
    }

    /// Run one frame
    pub fn tick(&mut self) -> SessionStatus {
        for event in self.surface.poll_events() {
            self.handle_event(event);
            if self.quit_requested {
                break;
            }
        }

        let frame = self.frame();
        self.surface.present(&frame);

        if frame.game_over.is_game_over() {
            SessionStatus::GameOver
        } else if self.quit_requested {
            SessionStatus::QuitRequested
        } else {
            SessionStatus::Running
        }
    }

    /// Tick at the configured frame rate until the game ends or the players quit
    pub fn run(mut self) -> SessionSummary {
        info!("[SESSION] Game started, {} to move", color_name(self.arbiter.turn()));
        let interval = self.settings.frame_interval();
        let status = loop {
            let started = Instant::now();
            match self.tick() {
                SessionStatus::Running => {
                    if let Some(remaining) = interval.checked_sub(started.elapsed()) {
                        thread::sleep(remaining);
                    }
                }
                status => break status,
            }
        };
        self.finish(status)
    }

    fn finish(mut self, status: SessionStatus) -> SessionSummary {
        self.listener.stop(self.settings.voice.stop_wait());

        let summary = self.summary(status == SessionStatus::QuitRequested);
        if status == SessionStatus::GameOver {
            info!("[SESSION] ========== GAME OVER ==========");
            info!("[SESSION] {}", summary.message());
            info!("[SESSION] Result: {}", summary.result);

            self.selection.clear();
            let frame = self.frame();
            self.surface.present(&frame);
            thread::sleep(self.settings.game_over_linger());
        } else {
            info!("[SESSION] Session ended after {} plies", summary.plies);
        }
        summary
    }

    fn summary(&self, quit: bool) -> SessionSummary {
        let history = self.arbiter.history();
        let (game_over, plies) = self
            .arbiter
            .with_engine(|engine| (GameOverState::from_engine(engine), engine.ply()));
        SessionSummary {
            result: game_over.result_string().to_string(),
            game_over,
            plies,
            pointer_moves: history.count_by_source(MoveSource::Pointer),
            voice_moves: history.count_by_source(MoveSource::Voice),
            movetext: history.movetext(),
            voice_stats: self.listener.stats(),
            quit,
        }
    }

    /// Build this tick's frame, dropping a selection the other path made stale
    fn frame(&mut self) -> Frame {
        let engine = self.arbiter.snapshot();
        if let Some(square) = self.selection.selected_square() {
            if engine.is_terminal() || !engine.is_friendly(square) {
                debug!("[INPUT] Selection on {} no longer valid, cleared", square);
                self.selection.clear();
            } else {
                self.selection = Selection::select(&engine, square);
            }
        }

        Frame {
            game_over: GameOverState::from_engine(&engine),
            orientation: self.geometry.orientation,
            selected: self.selection.selected_square(),
            destinations: self.selection.destinations().to_vec(),
            listening: self.listener.state(),
            last_move: self.arbiter.last_move(),
            engine,
        }
    }
}
