//! Voice listener lifecycle
//!
//! Owns at most one background worker that loops capture → transcribe →
//! parse → submit while listening is enabled.
//!
//! # States
//!
//! ```text
//!          start()                worker up
//!   Off ───────────► Starting ───────────────► Active
//!    ▲                  │                        │
//!    │                  │ request_stop()         │ request_stop()
//!    │                  ▼                        ▼
//!    └───────────── StopRequested ◄──────────────┘
//!      worker exits        │  start() resumes → Active
//! ```
//!
//! The state is the sole source of truth for whether the worker keeps going.
//! The worker checks it only between utterances; a capture in flight is never
//! interrupted. Stopping waits a bounded time for the worker to acknowledge
//! and then carries on regardless.

use crate::audio::error::{VoiceError, VoiceResult};
use crate::audio::parser::parse_command;
use crate::audio::speech::SpeechService;
use crate::core::VoiceSettings;
use crate::game::arbiter::Arbiter;
use crate::game::types::{color_name, MoveSource};
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Listening lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListeningState {
    #[default]
    Off,
    Starting,
    Active,
    StopRequested,
}

impl ListeningState {
    /// Whether the user currently wants voice input
    pub fn is_listening(self) -> bool {
        matches!(self, ListeningState::Starting | ListeningState::Active)
    }

    pub fn label(self) -> &'static str {
        match self {
            ListeningState::Off => "off",
            ListeningState::Starting => "starting",
            ListeningState::Active => "listening",
            ListeningState::StopRequested => "stopping",
        }
    }
}

/// Counters kept by the worker
#[derive(Debug, Default)]
pub struct ListenerStats {
    workers_spawned: AtomicU64,
    utterances: AtomicU64,
    applied: AtomicU64,
    rejected: AtomicU64,
}

/// Point-in-time copy of [`ListenerStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerStatsSnapshot {
    pub workers_spawned: u64,
    /// Utterances that produced a transcript
    pub utterances: u64,
    pub applied: u64,
    pub rejected: u64,
}

impl ListenerStats {
    fn snapshot(&self) -> ListenerStatsSnapshot {
        ListenerStatsSnapshot {
            workers_spawned: self.workers_spawned.load(Ordering::Relaxed),
            utterances: self.utterances.load(Ordering::Relaxed),
            applied: self.applied.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<ListeningState>,
    changed: Condvar,
    stats: ListenerStats,
}

impl Shared {
    fn set(&self, state: &mut ListeningState, next: ListeningState) {
        *state = next;
        self.changed.notify_all();
    }
}

/// Starts, stops and owns the voice worker
pub struct VoiceListener<V: SpeechService> {
    shared: Arc<Shared>,
    speech: Arc<V>,
    arbiter: Arbiter,
    settings: VoiceSettings,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<V: SpeechService> VoiceListener<V> {
    pub fn new(speech: V, arbiter: Arbiter, settings: VoiceSettings) -> Self {
        Self {
            shared: Arc::new(Shared::default()),
            speech: Arc::new(speech),
            arbiter,
            settings,
            worker: Mutex::new(None),
        }
    }

    pub fn state(&self) -> ListeningState {
        *self.shared.state.lock()
    }

    pub fn stats(&self) -> ListenerStatsSnapshot {
        self.shared.stats.snapshot()
    }

    /// Whether a worker thread is still alive
    pub fn is_running(&self) -> bool {
        self.worker
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Enable listening
    ///
    /// Returns `Ok(true)` only when a new worker was spawned. Calling this
    /// while `Starting` or `Active` does nothing; calling it while
    /// `StopRequested` cancels the stop and the existing worker carries on.
    pub fn start(&self) -> VoiceResult<bool> {
        let mut state = self.shared.state.lock();
        match *state {
            ListeningState::Starting | ListeningState::Active => {
                debug!("[VOICE] Already listening, start ignored");
                return Ok(false);
            }
            ListeningState::StopRequested => {
                self.shared.set(&mut state, ListeningState::Active);
                info!("[VOICE] Listening ON (stop cancelled)");
                return Ok(false);
            }
            ListeningState::Off => {}
        }

        let discarded = self.speech.discard_pending();
        if discarded > 0 {
            debug!("[VOICE] Dropped {} utterance(s) heard while off", discarded);
        }
        self.shared.set(&mut state, ListeningState::Starting);
        let worker = VoiceWorker {
            shared: Arc::clone(&self.shared),
            speech: Arc::clone(&self.speech),
            arbiter: self.arbiter.clone(),
            settings: self.settings.clone(),
        };
        let spawned = thread::Builder::new()
            .name("voice-listener".to_string())
            .spawn(move || worker.run());

        match spawned {
            Ok(handle) => {
                self.shared.stats.workers_spawned.fetch_add(1, Ordering::Relaxed);
                *self.worker.lock() = Some(handle);
                Ok(true)
            }
            Err(err) => {
                self.shared.set(&mut state, ListeningState::Off);
                Err(VoiceError::Spawn(err))
            }
        }
    }

    /// Ask the worker to stop at its next checkpoint
    ///
    /// Returns `true` if this call changed the state.
    pub fn request_stop(&self) -> bool {
        let mut state = self.shared.state.lock();
        if state.is_listening() {
            self.shared.set(&mut state, ListeningState::StopRequested);
            info!("[VOICE] Listening OFF requested");
            true
        } else {
            false
        }
    }

    /// Flip listening on or off, as the toggle key does
    pub fn toggle(&self) -> VoiceResult<ListeningState> {
        if self.state().is_listening() {
            self.request_stop();
        } else {
            self.start()?;
        }
        Ok(self.state())
    }

    /// Request a stop and wait up to `timeout` for the worker to exit
    ///
    /// Returns `true` when the worker acknowledged in time. Otherwise the
    /// worker is left to finish on its own at its next checkpoint.
    pub fn stop(&self, timeout: Duration) -> bool {
        self.request_stop();
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        while *state != ListeningState::Off {
            if self.shared.changed.wait_until(&mut state, deadline).timed_out() {
                break;
            }
        }
        let acknowledged = *state == ListeningState::Off;
        drop(state);

        if acknowledged {
            if let Some(handle) = self.worker.lock().take() {
                if handle.join().is_err() {
                    warn!("[VOICE] Listener thread panicked");
                }
            }
        } else {
            warn!(
                "[VOICE] Listener did not stop within {:?}, continuing without it",
                timeout
            );
        }
        acknowledged
    }
}

impl<V: SpeechService> Drop for VoiceListener<V> {
    fn drop(&mut self) {
        self.request_stop();
    }
}

struct VoiceWorker<V: SpeechService> {
    shared: Arc<Shared>,
    speech: Arc<V>,
    arbiter: Arbiter,
    settings: VoiceSettings,
}

impl<V: SpeechService> VoiceWorker<V> {
    fn run(self) {
        {
            let mut state = self.shared.state.lock();
            if *state == ListeningState::Starting {
                self.shared.set(&mut state, ListeningState::Active);
            }
        }
        info!("[VOICE] Listening ON");

        while self.checkpoint() {
            let turn = self.arbiter.turn();
            info!("[VOICE] {}, your move. Please speak...", color_name(turn));

            let captured = self
                .speech
                .capture_utterance(self.settings.start_timeout(), self.settings.phrase_limit());
            if !self.checkpoint() {
                break;
            }
            let transcript = captured.and_then(|utterance| self.speech.transcribe(&utterance));
            if !self.checkpoint() {
                break;
            }

            match transcript {
                Ok(text) => self.handle_transcript(&text),
                Err(VoiceError::NoSpeechDetected) => debug!("[VOICE] No speech detected"),
                Err(err) => warn!("[VOICE] {}", err),
            }
        }

        info!("[VOICE] Listening OFF");
    }

    /// Decide whether to keep listening; on exit, publish `Off`
    ///
    /// Deciding and publishing happen under one lock so a concurrent `start`
    /// either resumes this worker or sees `Off` and spawns a fresh one.
    fn checkpoint(&self) -> bool {
        let terminal = self.arbiter.is_terminal();
        let mut state = self.shared.state.lock();
        if *state == ListeningState::Active && !terminal {
            return true;
        }
        if terminal {
            debug!("[VOICE] Game over, listener exiting");
        }
        self.shared.set(&mut state, ListeningState::Off);
        false
    }

    fn handle_transcript(&self, text: &str) {
        let stats = &self.shared.stats;
        stats.utterances.fetch_add(1, Ordering::Relaxed);
        info!("[VOICE] Heard \"{}\"", text);

        let legal_moves = self.arbiter.legal_moves();
        let outcome = parse_command(text, &legal_moves)
            .map_err(|err| err.to_string())
            .and_then(|candidate| {
                self.arbiter
                    .submit(candidate, MoveSource::Voice)
                    .map_err(|err| err.to_string())
            });

        match outcome {
            Ok(applied) => {
                stats.applied.fetch_add(1, Ordering::Relaxed);
                debug!("[VOICE] Applied {} at ply {}", applied.san, applied.ply);
            }
            Err(reason) => {
                stats.rejected.fetch_add(1, Ordering::Relaxed);
                warn!("[VOICE] Invalid or illegal move: {}", reason);
            }
        }
    }
}
