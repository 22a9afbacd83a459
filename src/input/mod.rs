//! Input module - raw surface events and pointer mapping
//!
//! # Architecture
//!
//! - `pointer` - Pure pixel ↔ square mapping
//! - [`SurfaceEvent`] - What a render/input surface reports each frame
//!
//! Surfaces report pixels, never squares; the session maps clicks through
//! [`BoardGeometry`] before they reach the selection state machine.

pub mod pointer;

pub use pointer::{BoardGeometry, Orientation, MAX_SQUARE_SIZE};

/// Event produced by a render/input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Primary button click at window pixel `(x, y)`
    PointerClick { x: i32, y: i32 },
    /// Voice listening on/off toggle
    ToggleListening,
    /// Window closed or user asked to leave
    Quit,
}
