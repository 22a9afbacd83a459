//! Console front end
//!
//! A line-oriented [`BoardSurface`] for terminals. Commands typed on stdin
//! are read on a background thread and turned into surface events:
//!
//! ```text
//! click X Y     pointer click at window pixel (X, Y)
//! square e2     pointer click at the center of e2
//! toggle        voice listening on/off
//! say <text>    speak <text> into the scripted microphone
//! help          list commands
//! quit          leave the game
//! ```
//!
//! `say` lines reach the [`SpeechFeed`] one poll after they are read, so a
//! `toggle` typed just before them is handled first. Speech heard while
//! listening is off is dropped when listening starts. The board is printed
//! whenever the picture changes.

use crate::audio::SpeechFeed;
use crate::input::{BoardGeometry, SurfaceEvent};
use crate::rendering::{render_board, BoardSurface, Frame};
use crossbeam_channel::{unbounded, Receiver, Sender};
use shakmaty::Square;
use std::io::{self, BufRead, Write};
use std::thread;
use thiserror::Error;
use tracing::{debug, warn};

const HELP: &str = "commands: click X Y | square e2 | toggle | say <text> | help | quit";

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Event(SurfaceEvent),
    Say(String),
    Help,
}

/// Why a console line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command \"{0}\", type help")]
    Unknown(String),

    #[error("{command}: {message}")]
    BadArgument { command: String, message: String },
}

fn bad_argument(command: &str, message: &str) -> ConsoleCommandError {
    ConsoleCommandError::BadArgument {
        command: command.to_string(),
        message: message.to_string(),
    }
}

/// Parse one stdin line
pub fn parse_console_line(
    line: &str,
    geometry: &BoardGeometry,
) -> Result<ConsoleCommand, ConsoleCommandError> {
    let line = line.trim();
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match command.to_lowercase().as_str() {
        "" => Err(ConsoleCommandError::Empty),
        "click" => {
            let coords: Vec<&str> = rest.split_whitespace().collect();
            let [x, y] = coords.as_slice() else {
                return Err(bad_argument(command, "expected two pixel coordinates"));
            };
            let x = x
                .parse::<i32>()
                .map_err(|_| bad_argument(command, "x is not a number"))?;
            let y = y
                .parse::<i32>()
                .map_err(|_| bad_argument(command, "y is not a number"))?;
            Ok(ConsoleCommand::Event(SurfaceEvent::PointerClick { x, y }))
        }
        "square" => {
            let square = rest
                .to_lowercase()
                .parse::<Square>()
                .map_err(|_| bad_argument(command, "expected a square such as e2"))?;
            let (x, y) = geometry.square_center(square);
            Ok(ConsoleCommand::Event(SurfaceEvent::PointerClick {
                x: x as i32,
                y: y as i32,
            }))
        }
        "toggle" => Ok(ConsoleCommand::Event(SurfaceEvent::ToggleListening)),
        "say" if rest.is_empty() => Err(bad_argument(command, "nothing to say")),
        "say" => Ok(ConsoleCommand::Say(rest.to_string())),
        "help" => Ok(ConsoleCommand::Help),
        "quit" | "exit" => Ok(ConsoleCommand::Event(SurfaceEvent::Quit)),
        other => Err(ConsoleCommandError::Unknown(other.to_string())),
    }
}

/// Terminal surface reading commands from stdin
pub struct ConsoleSurface {
    lines: Receiver<String>,
    geometry: BoardGeometry,
    feed: SpeechFeed,
    pending_speech: Vec<String>,
    last_printed: Option<Frame>,
}

impl ConsoleSurface {
    /// Start the stdin reader thread
    pub fn spawn(geometry: BoardGeometry, feed: SpeechFeed) -> io::Result<Self> {
        let (tx, rx) = unbounded();
        thread::Builder::new()
            .name("console-input".to_string())
            .spawn(move || read_stdin(tx))?;
        println!("{}", HELP);
        Ok(Self::from_lines(rx, geometry, feed))
    }

    /// Surface over an existing line source
    pub fn from_lines(lines: Receiver<String>, geometry: BoardGeometry, feed: SpeechFeed) -> Self {
        Self {
            lines,
            geometry,
            feed,
            pending_speech: Vec::new(),
            last_printed: None,
        }
    }
}

fn read_stdin(tx: Sender<String>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if tx.send(line).is_err() {
                    return;
                }
            }
            Err(err) => {
                warn!("[INPUT] stdin read error: {}", err);
                break;
            }
        }
    }
    debug!("[INPUT] stdin closed");
    let _ = tx.send("quit".to_string());
}

impl BoardSurface for ConsoleSurface {
    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        for text in self.pending_speech.drain(..) {
            self.feed.say(text);
        }

        let mut events = Vec::new();
        for line in self.lines.try_iter() {
            match parse_console_line(&line, &self.geometry) {
                Ok(ConsoleCommand::Event(event)) => events.push(event),
                Ok(ConsoleCommand::Say(text)) => self.pending_speech.push(text),
                Ok(ConsoleCommand::Help) => println!("{}", HELP),
                Err(ConsoleCommandError::Empty) => {}
                Err(err) => println!("{}", err),
            }
        }
        events
    }

    fn present(&mut self, frame: &Frame) {
        let unchanged = self
            .last_printed
            .as_ref()
            .is_some_and(|last| last.same_picture(frame));
        if unchanged {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\n{}", render_board(frame));
        let _ = stdout.flush();
        self.last_printed = Some(frame.clone());
    }
}
