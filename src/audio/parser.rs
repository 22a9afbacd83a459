//! Spoken command → move candidate
//!
//! Grammar, deliberately small:
//!
//! ```text
//! <anything> <piece name> <anything> to <square, spaces allowed>
//! ```
//!
//! The first piece name found in the fixed order pawn, knight, bishop, rook,
//! queen, king decides the moving role. The destination is whatever follows
//! the last standalone word `to`, with whitespace removed, so "e 5" reads as
//! `e5`.
//!
//! When two pieces of the same role can reach the destination, the first one
//! in the rules library's enumeration order wins.

use crate::game::resources::LegalMove;
use crate::game::types::MoveCandidate;
use shakmaty::{Role, Square};
use thiserror::Error;

/// Piece names in the order they are searched for
pub const PIECE_NAMES: [(&str, Role); 6] = [
    ("pawn", Role::Pawn),
    ("knight", Role::Knight),
    ("bishop", Role::Bishop),
    ("rook", Role::Rook),
    ("queen", Role::Queen),
    ("king", Role::King),
];

/// Why a transcript did not produce a candidate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("no piece name in command")]
    NoPieceName,

    #[error("no destination after \"to\"")]
    NoDestination,

    #[error("\"{0}\" is not a square")]
    BadSquare(String),

    #[error("no legal {role:?} move to {to}")]
    NoMatchingMove { role: Role, to: Square },
}

/// A transcript broken into its two meaningful parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand {
    pub role: Role,
    pub to: Square,
}

/// First piece name present in `text`, in canonical order
pub fn detect_role(text: &str) -> Option<Role> {
    PIECE_NAMES
        .iter()
        .find(|(name, _)| text.contains(name))
        .map(|&(_, role)| role)
}

/// Text after the last standalone `to`, whitespace removed
pub fn destination_token(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let position = words.iter().rposition(|word| *word == "to")?;
    let token: String = words[position + 1..].concat();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Extract role and destination without consulting the position
pub fn parse_text(text: &str) -> Result<ParsedCommand, CommandError> {
    let text = text.to_lowercase();
    let role = detect_role(&text).ok_or(CommandError::NoPieceName)?;
    let token = destination_token(&text).ok_or(CommandError::NoDestination)?;
    let to = token
        .parse::<Square>()
        .map_err(|_| CommandError::BadSquare(token.clone()))?;
    Ok(ParsedCommand { role, to })
}

/// Resolve a transcript against the legal moves of the current position
pub fn parse_command(text: &str, legal_moves: &[LegalMove]) -> Result<MoveCandidate, CommandError> {
    let ParsedCommand { role, to } = parse_text(text)?;
    legal_moves
        .iter()
        .find(|legal| legal.role == role && legal.to == to)
        .map(LegalMove::candidate)
        .ok_or(CommandError::NoMatchingMove { role, to })
}
