//! Move proposal types shared by the pointer and voice paths
//!
//! A [`MoveCandidate`] is an unvalidated proposal. It never outlives the
//! arbitration step that consumes it.

use shakmaty::uci::UciMove;
use shakmaty::{Rank, Role, Square};
use std::fmt;

/// Proposed move awaiting arbitration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl MoveCandidate {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, role: Role) -> Self {
        self.promotion = Some(role);
        self
    }

    /// Build a candidate for a piece of `role` moving `from → to`, promoting
    /// pawns that land on the first or last rank to a queen
    ///
    /// Under-promotion is never produced here.
    pub fn auto_queen(role: Role, from: Square, to: Square) -> Self {
        let candidate = Self::new(from, to);
        if role == Role::Pawn && matches!(to.rank(), Rank::First | Rank::Eighth) {
            candidate.with_promotion(Role::Queen)
        } else {
            candidate
        }
    }

    /// UCI form in standard castling notation (`e1g1`, `e7e8q`)
    pub fn to_uci(&self) -> UciMove {
        UciMove::Normal {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

/// Which input path produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSource {
    Pointer,
    Voice,
}

impl MoveSource {
    pub fn label(self) -> &'static str {
        match self {
            MoveSource::Pointer => "pointer",
            MoveSource::Voice => "voice",
        }
    }
}

/// Human-readable side name used in prompts and logs
pub fn color_name(color: shakmaty::Color) -> &'static str {
    match color {
        shakmaty::Color::White => "White",
        shakmaty::Color::Black => "Black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_queen_on_last_rank() {
        //! Pawns reaching the eighth rank always become queens
        let candidate = MoveCandidate::auto_queen(Role::Pawn, Square::E7, Square::E8);
        assert_eq!(candidate.promotion, Some(Role::Queen));
        assert_eq!(candidate.to_string(), "e7e8q");
    }

    #[test]
    fn test_auto_queen_for_black_pawn() {
        //! Black pawns promote on the first rank
        let candidate = MoveCandidate::auto_queen(Role::Pawn, Square::B2, Square::A1);
        assert_eq!(candidate.promotion, Some(Role::Queen));
    }

    #[test]
    fn test_no_promotion_for_pieces() {
        //! A rook landing on the back rank is not a promotion
        let candidate = MoveCandidate::auto_queen(Role::Rook, Square::A7, Square::A8);
        assert_eq!(candidate.promotion, None);
        assert_eq!(candidate.to_string(), "a7a8");
    }

    #[test]
    fn test_no_promotion_mid_board() {
        let candidate = MoveCandidate::auto_queen(Role::Pawn, Square::E2, Square::E4);
        assert_eq!(candidate.promotion, None);
    }
}
