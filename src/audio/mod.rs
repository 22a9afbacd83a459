//! Voice command pipeline
//!
//! # Architecture
//!
//! - `speech` - Capture/transcribe seam and a scripted implementation
//! - `parser` - Transcript → move candidate against the current legal moves
//! - `listener` - Listening lifecycle and the background worker
//! - `error` - Voice error taxonomy
//!
//! The worker only ever reaches the position through the shared
//! [`Arbiter`](crate::game::Arbiter).

pub mod error;
pub mod listener;
pub mod parser;
pub mod speech;

pub use error::{VoiceError, VoiceResult};
pub use listener::{ListeningState, ListenerStatsSnapshot, VoiceListener};
pub use parser::{parse_command, parse_text, CommandError, ParsedCommand};
pub use speech::{ScriptedReply, ScriptedSpeech, SpeechFeed, SpeechService, Utterance};
