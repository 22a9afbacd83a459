//! Game settings and their persistence
//!
//! Settings live in `settings.json` under the user's configuration
//! directory, e.g. `~/.config/chesspeak/settings.json` on Linux. The binary
//! can point at another file with `--settings`.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use crate::core::error::{CoreError, CoreResult};
use crate::input::{BoardGeometry, Orientation, MAX_SQUARE_SIZE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Voice capture timings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// How long to wait for speech to begin
    pub start_timeout_ms: u64,
    /// Longest phrase captured in one utterance
    pub phrase_limit_ms: u64,
    /// How long a stop waits for the worker before moving on
    pub stop_wait_ms: u64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            start_timeout_ms: 5000,
            phrase_limit_ms: 5000,
            stop_wait_ms: 1000,
        }
    }
}

impl VoiceSettings {
    pub fn start_timeout(&self) -> Duration {
        Duration::from_millis(self.start_timeout_ms)
    }

    pub fn phrase_limit(&self) -> Duration {
        Duration::from_millis(self.phrase_limit_ms)
    }

    pub fn stop_wait(&self) -> Duration {
        Duration::from_millis(self.stop_wait_ms)
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Side of one square in pixels
    pub square_size: u32,

    /// Which side is drawn at the bottom
    pub orientation: Orientation,

    /// Session ticks per second
    pub frame_rate: u32,

    pub voice: VoiceSettings,

    /// How long the final position stays up after the game ends
    pub game_over_linger_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            square_size: 75,
            orientation: Orientation::WhiteBottom,
            frame_rate: 30,
            voice: VoiceSettings::default(),
            game_over_linger_ms: 2000,
        }
    }
}

impl GameSettings {
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.square_size, self.orientation)
    }

    /// Time between session ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    pub fn game_over_linger(&self) -> Duration {
        Duration::from_millis(self.game_over_linger_ms)
    }

    fn validate(&self, path: &Path) -> CoreResult<()> {
        let invalid = |message: &str| CoreError::InvalidSetting {
            path: path.to_path_buf(),
            message: message.to_string(),
        };
        if self.square_size == 0 {
            return Err(invalid("square_size must be positive"));
        }
        if self.square_size > MAX_SQUARE_SIZE {
            return Err(invalid("square_size is too large for the window"));
        }
        if self.frame_rate == 0 {
            return Err(invalid("frame_rate must be positive"));
        }
        Ok(())
    }
}

/// Default settings file location
///
/// Falls back to `settings.json` in the working directory when the platform
/// config directory cannot be resolved.
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "chesspeak", "chesspeak") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Read and validate settings, reporting every failure
pub fn try_load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate(path)?;
    Ok(settings)
}

/// Load settings, using defaults when the file is missing or unusable
pub fn load_settings(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] Failed to load settings at {:?}: {}. Using defaults.", path, e);
            GameSettings::default()
        }
    }
}

/// Write settings as pretty JSON, creating the directory if needed
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
