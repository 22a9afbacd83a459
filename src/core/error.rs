//! Error types for core module
//!
//! Settings persistence is the only fallible core concern; loading never
//! surfaces these to the player, saving reports them to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Value read from the file is out of range
    #[error("Invalid setting in {path:?}: {message}")]
    InvalidSetting { path: PathBuf, message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
