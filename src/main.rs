//! chesspeak - console front end
//!
//! Plays a two-player game in the terminal. Moves come from `square`/`click`
//! commands or, while listening is on, from `say` lines fed to the scripted
//! microphone.

use anyhow::{Context, Result};
use chesspeak::audio::ScriptedSpeech;
use chesspeak::core::{init_logging, load_settings, save_settings, settings_path};
use chesspeak::game::{ChessEngine, GameSession};
use chesspeak::ui::ConsoleSurface;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Two-player chess by pointer and voice
#[derive(Parser, Debug)]
#[command(name = "chesspeak")]
#[command(about = "Two-player chess with pointer and voice input", long_about = None)]
#[command(version)]
struct Args {
    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Draw the board with black at the bottom
    #[arg(long)]
    flip: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let path = args.settings.unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);
    if args.save_settings {
        save_settings(&settings, &path)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
    }
    if args.flip {
        settings.orientation = settings.orientation.flipped();
    }

    let engine = match args.fen.as_deref() {
        Some(fen) => ChessEngine::from_fen(fen).context("invalid --fen")?,
        None => ChessEngine::new(),
    };

    let (speech, feed) = ScriptedSpeech::new();
    let surface = ConsoleSurface::spawn(settings.geometry(), feed)
        .context("failed to start console input")?;

    let summary = GameSession::new(surface, speech, engine, settings).run();
    info!(
        "[SESSION] {} after {} plies ({} pointer, {} voice)",
        summary.result, summary.plies, summary.pointer_moves, summary.voice_moves
    );
    println!("{}", summary.message());
    if !summary.movetext.is_empty() {
        println!("{} {}", summary.movetext, summary.result);
    }
    Ok(())
}
