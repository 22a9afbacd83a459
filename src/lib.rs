//! Two-player chess driven by pointer clicks and spoken commands
//!
//! Both input paths propose moves to a shared [`game::Arbiter`], which
//! re-validates each one against the live position before applying it.

pub mod audio;
pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
pub mod ui;
