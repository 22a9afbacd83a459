//! Chess engine resource
//!
//! The move legality oracle consumed by both input paths.

pub mod engine;

pub use engine::*;
