//! Core module - settings, logging and their errors
//!
//! # Architecture Overview
//!
//! - [`GameSettings`] - Board geometry, frame rate, voice timeouts
//! - `settings` - JSON persistence under the user's config directory
//! - `logging` - `tracing` subscriber with an `EnvFilter`
//! - `error` - [`CoreError`] for settings I/O

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::{
    load_settings, save_settings, settings_path, try_load_settings, GameSettings, VoiceSettings,
};
