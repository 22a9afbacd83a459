//! Speech capture and transcription seam
//!
//! [`SpeechService`] is the boundary to whatever records the microphone and
//! turns audio into text. The listener only ever calls it from its worker
//! thread, never while holding the position lock.
//!
//! [`ScriptedSpeech`] is a channel-backed implementation: utterances are fed
//! in as text through a [`SpeechFeed`]. Tests and the console front end use it.

use crate::audio::error::{VoiceError, VoiceResult};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// One bounded audio capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Raw audio payload in the service's own encoding
    pub audio: Vec<u8>,
}

/// Microphone + speech-to-text backend
pub trait SpeechService: Send + Sync + 'static {
    /// Block until one utterance is captured
    ///
    /// Returns [`VoiceError::NoSpeechDetected`] if nothing starts within
    /// `start_timeout`. Phrases are cut off after `phrase_limit`.
    fn capture_utterance(
        &self,
        start_timeout: Duration,
        phrase_limit: Duration,
    ) -> VoiceResult<Utterance>;

    /// Turn captured audio into text
    fn transcribe(&self, utterance: &Utterance) -> VoiceResult<String>;

    /// Throw away audio buffered before listening was switched on
    ///
    /// Returns how many utterances were dropped.
    fn discard_pending(&self) -> usize {
        0
    }
}

/// What the scripted microphone hears next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// Clear speech with this transcript
    Say(String),
    /// Captured audio the recognizer cannot make sense of
    Mumble,
    /// Recognizer backend is down for this utterance
    Outage,
}

const MUMBLE_MARKER: &[u8] = &[0xff, 0xfe];
const OUTAGE_MARKER: &[u8] = &[0xff, 0xfd];

/// Sending half of a [`ScriptedSpeech`]
#[derive(Debug, Clone)]
pub struct SpeechFeed {
    tx: Sender<ScriptedReply>,
}

impl SpeechFeed {
    pub fn say(&self, text: impl Into<String>) {
        self.send(ScriptedReply::Say(text.into()));
    }

    pub fn mumble(&self) {
        self.send(ScriptedReply::Mumble);
    }

    pub fn outage(&self) {
        self.send(ScriptedReply::Outage);
    }

    pub fn send(&self, reply: ScriptedReply) {
        // The service side only disappears at shutdown.
        let _ = self.tx.send(reply);
    }
}

/// Speech service driven by text fed through a channel
#[derive(Debug)]
pub struct ScriptedSpeech {
    rx: Receiver<ScriptedReply>,
}

impl ScriptedSpeech {
    pub fn new() -> (Self, SpeechFeed) {
        let (tx, rx) = unbounded();
        (Self { rx }, SpeechFeed { tx })
    }
}

impl SpeechService for ScriptedSpeech {
    fn capture_utterance(
        &self,
        start_timeout: Duration,
        _phrase_limit: Duration,
    ) -> VoiceResult<Utterance> {
        let reply = match self.rx.recv_timeout(start_timeout) {
            Ok(reply) => reply,
            Err(RecvTimeoutError::Timeout) => return Err(VoiceError::NoSpeechDetected),
            Err(RecvTimeoutError::Disconnected) => {
                // Behave like a silent microphone rather than spinning.
                thread::sleep(start_timeout);
                return Err(VoiceError::NoSpeechDetected);
            }
        };
        let audio = match reply {
            ScriptedReply::Say(text) => text.into_bytes(),
            ScriptedReply::Mumble => MUMBLE_MARKER.to_vec(),
            ScriptedReply::Outage => OUTAGE_MARKER.to_vec(),
        };
        Ok(Utterance { audio })
    }

    fn transcribe(&self, utterance: &Utterance) -> VoiceResult<String> {
        if utterance.audio == OUTAGE_MARKER {
            return Err(VoiceError::ServiceUnavailable {
                message: "scripted outage".to_string(),
            });
        }
        let text =
            String::from_utf8(utterance.audio.clone()).map_err(|_| VoiceError::UnrecognizedAudio)?;
        if text.trim().is_empty() {
            return Err(VoiceError::UnrecognizedAudio);
        }
        Ok(text.to_lowercase())
    }

    fn discard_pending(&self) -> usize {
        self.rx.try_iter().count()
    }
}
