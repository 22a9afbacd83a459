//! Chess engine resource - the move legality oracle
//!
//! Wraps a `shakmaty::Chess` position and is the single source of truth for:
//! - Legal move generation (in the rules library's enumeration order)
//! - Move validation and application
//! - Terminal detection (checkmate, stalemate, insufficient material)
//!
//! Everything above this type talks in [`MoveCandidate`]s and [`LegalMove`]s;
//! only this file touches the rules library's move representation.
//!
//! # Coordinate System
//!
//! Squares are `shakmaty::Square` values (`a1` = 0 … `h8` = 63). Castling is
//! reported in standard notation, so the king's destination is `g1`/`c1`
//! (or `g8`/`c8`), matching what a player clicks.

use crate::game::error::{GameError, GameResult};
use crate::game::types::MoveCandidate;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Move, Outcome, Piece, Position, Role, Square};

/// One legal move, flattened to the fields the input paths care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    /// Role of the moving piece
    pub role: Role,
    pub from: Square,
    /// Destination in standard notation (king square for castling)
    pub to: Square,
    pub promotion: Option<Role>,
}

impl LegalMove {
    pub fn candidate(&self) -> MoveCandidate {
        MoveCandidate {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }

    fn from_move(m: &Move) -> Option<Self> {
        match m.to_uci(CastlingMode::Standard) {
            UciMove::Normal {
                from,
                to,
                promotion,
            } => Some(Self {
                role: m.role(),
                from,
                to,
                promotion,
            }),
            _ => None,
        }
    }
}

/// Chess engine resource - authoritative game position
///
/// Cloning produces an independent snapshot; the live copy is held by
/// [`crate::game::Arbiter`].
#[derive(Debug, Clone, Default)]
pub struct ChessEngine {
    position: Chess,
    /// Half-moves applied through this engine
    ply: u32,
}

impl ChessEngine {
    /// Standard starting position, white to move
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from a FEN string
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let parsed: Fen = fen.trim().parse().map_err(|e| GameError::InvalidPosition {
            message: format!("{fen}: {e}"),
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| GameError::InvalidPosition {
                    message: format!("{fen}: {e}"),
                })?;
        Ok(Self { position, ply: 0 })
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// True when `square` holds a piece of the side to move
    pub fn is_friendly(&self, square: Square) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color == self.turn())
    }

    /// All occupied squares, a1 first
    pub fn pieces(&self) -> Vec<(Square, Piece)> {
        Square::ALL
            .iter()
            .filter_map(|&square| self.piece_at(square).map(|piece| (square, piece)))
            .collect()
    }

    /// Legal moves in the rules library's enumeration order
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(LegalMove::from_move)
            .collect()
    }

    /// Distinct destinations for the piece on `from`
    ///
    /// Promotions to different roles collapse into one destination.
    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        let mut destinations: Vec<Square> = Vec::new();
        for legal in self.legal_moves() {
            if legal.from == from && !destinations.contains(&legal.to) {
                destinations.push(legal.to);
            }
        }
        destinations
    }

    fn resolve(&self, candidate: &MoveCandidate) -> GameResult<Move> {
        candidate
            .to_uci()
            .to_move(&self.position)
            .map_err(|e| GameError::IllegalMove {
                uci: candidate.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn is_legal(&self, candidate: &MoveCandidate) -> bool {
        self.resolve(candidate).is_ok()
    }

    /// Validate and apply a candidate, returning its SAN
    ///
    /// The position is untouched when the candidate is illegal.
    pub fn apply(&mut self, candidate: &MoveCandidate) -> GameResult<String> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        let m = self.resolve(candidate)?;
        let san = SanPlus::from_move_and_play_unchecked(&mut self.position, &m);
        self.ply += 1;
        Ok(san.to_string())
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn is_terminal(&self) -> bool {
        self.position.is_game_over()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.position.outcome()
    }

    /// PGN-style result: `1-0`, `0-1`, `1/2-1/2`, or `*` while playing
    pub fn result_string(&self) -> &'static str {
        match self.outcome() {
            Some(Outcome::Decisive {
                winner: Color::White,
            }) => "1-0",
            Some(Outcome::Decisive {
                winner: Color::Black,
            }) => "0-1",
            Some(Outcome::Draw) => "1/2-1/2",
            None => "*",
        }
    }
}
