//! Plain-text board drawing
//!
//! Each square is three characters wide:
//!
//! ```text
//!  P   piece (uppercase white, lowercase black)
//!  .   empty square
//! [N]  selected piece
//!  *   empty legal destination
//! (p)  capturable piece on a legal destination
//! ```
//!
//! File letters run along the bottom and rank numbers down the left side, in
//! the frame's orientation.

use crate::input::BoardGeometry;
use crate::rendering::Frame;
use shakmaty::Square;

/// One row per rank plus the file legend and status line
pub fn render_board(frame: &Frame) -> String {
    // A one-pixel grid maps (column, row) straight to squares.
    let grid = BoardGeometry::new(1, frame.orientation);
    let mut out = String::new();

    for row in 0..8 {
        let Some(first) = grid.square_at(0, row) else {
            continue;
        };
        out.push_str(&format!("{} ", first.rank().char()));
        for column in 0..8 {
            if let Some(square) = grid.square_at(column, row) {
                out.push_str(&cell(frame, square));
            }
        }
        out.push('\n');
    }

    out.push_str("  ");
    for column in 0..8 {
        if let Some(square) = grid.square_at(column, 7) {
            out.push_str(&format!(" {} ", square.file().char()));
        }
    }
    out.push('\n');
    out.push_str(&frame.status_line());
    out.push('\n');
    out
}

fn cell(frame: &Frame, square: Square) -> String {
    let symbol = frame
        .engine
        .piece_at(square)
        .map(|piece| piece.char())
        .unwrap_or('.');

    if frame.selected == Some(square) {
        format!("[{}]", symbol)
    } else if frame.destinations.contains(&square) {
        if symbol == '.' {
            " * ".to_string()
        } else {
            format!("({})", symbol)
        }
    } else {
        format!(" {} ", symbol)
    }
}
