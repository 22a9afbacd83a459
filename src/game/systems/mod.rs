//! Chess game systems module
//!
//! Systems turn surface input into game actions.
//!
//! ## Core Gameplay Systems
//! - [`input`] - Selection state machine for pointer clicks
//!
//! ```text
//! ┌─────────────────┐
//! │ Input           │  Pointer click on a square
//! │                 │  → Updates Selection
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Arbiter         │  Re-validates and applies the move
//! │                 │  → Position advances once
//! └─────────────────┘
//! ```

pub mod input;

pub use input::{handle_square_click, resolve_click, ClickAction, ClickOutcome};
