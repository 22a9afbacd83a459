//! UI module - text front end
//!
//! - **console**: stdin commands in, plain-text board out

pub mod console;

pub use console::{parse_console_line, ConsoleCommand, ConsoleCommandError, ConsoleSurface};
