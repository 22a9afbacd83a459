//! Move history resource
//!
//! Append-only record of every move the arbiter accepted, tagged with the
//! input path that proposed it.

use crate::game::types::{MoveCandidate, MoveSource};

/// One accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Ply number after the move (first move is 1)
    pub ply: u32,
    pub san: String,
    pub candidate: MoveCandidate,
    pub source: MoveSource,
}

/// Store of accepted moves in application order
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the last move made
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of accepted moves proposed by `source`
    pub fn count_by_source(&self, source: MoveSource) -> usize {
        self.moves.iter().filter(|m| m.source == source).count()
    }

    /// SAN movetext with move numbers, e.g. `1. e4 e5 2. Nf3`
    pub fn movetext(&self) -> String {
        let mut text = String::new();
        for (index, record) in self.moves.iter().enumerate() {
            if index % 2 == 0 {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(&format!("{}. ", index / 2 + 1));
            } else {
                text.push(' ');
            }
            text.push_str(&record.san);
        }
        text
    }
}
