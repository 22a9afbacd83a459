//! Error types for the voice pipeline
//!
//! Everything except [`VoiceError::Spawn`] is recovered inside the listening
//! loop: logged, then the worker goes back to listening.

use thiserror::Error;

/// Errors raised while capturing or transcribing speech
#[derive(Error, Debug)]
pub enum VoiceError {
    /// Nothing was said before the start timeout
    #[error("No speech detected")]
    NoSpeechDetected,

    /// Audio was captured but could not be understood
    #[error("Could not understand the audio")]
    UnrecognizedAudio,

    /// Transcription backend could not be reached
    #[error("Speech recognition service is unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// Listener thread could not be started
    #[error("Failed to spawn voice listener: {0}")]
    Spawn(#[from] std::io::Error),
}

impl VoiceError {
    /// Whether the listening loop should keep going after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, VoiceError::Spawn(_))
    }
}

/// Result type alias for voice operations
pub type VoiceResult<T> = Result<T, VoiceError>;
