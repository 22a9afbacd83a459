//! Pixel ↔ square mapping for pointer input
//!
//! The board is drawn as an 8×8 grid of `square_size` pixel squares with the
//! window origin at the top-left corner. With [`Orientation::WhiteBottom`]
//! rank 1 is the bottom row and file a the leftmost column; with
//! [`Orientation::BlackBottom`] the board is rotated 180°.
//!
//! Everything here is pure: no state, no side effects, out-of-bounds input
//! maps to `None`.

use serde::{Deserialize, Serialize};
use shakmaty::{File, Rank, Square};

/// Largest square size whose whole board still fits in `i32` pixel coordinates
pub const MAX_SQUARE_SIZE: u32 = i32::MAX as u32 / 8;

/// Which side is drawn at the bottom of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    WhiteBottom,
    BlackBottom,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::WhiteBottom => Orientation::BlackBottom,
            Orientation::BlackBottom => Orientation::WhiteBottom,
        }
    }
}

/// Board geometry in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub square_size: u32,
    pub orientation: Orientation,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            square_size: 75,
            orientation: Orientation::WhiteBottom,
        }
    }
}

impl BoardGeometry {
    pub fn new(square_size: u32, orientation: Orientation) -> Self {
        Self {
            square_size,
            orientation,
        }
    }

    /// Side length of the whole board in pixels, saturating at `u32::MAX`
    pub fn board_size(&self) -> u32 {
        self.square_size.saturating_mul(8)
    }

    /// Square under the pixel `(x, y)`, or `None` outside the board
    pub fn square_at(&self, x: i32, y: i32) -> Option<Square> {
        if self.square_size == 0 || x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        let board_size = self.square_size.checked_mul(8);
        if board_size.is_some_and(|size| x >= size || y >= size) {
            return None;
        }
        let column = x / self.square_size;
        let row = y / self.square_size;
        let (file, rank) = match self.orientation {
            Orientation::WhiteBottom => (column, 7 - row),
            Orientation::BlackBottom => (7 - column, row),
        };
        Some(Square::from_coords(File::new(file), Rank::new(rank)))
    }

    /// Top-left pixel of `square`, saturating for oversized squares
    pub fn square_origin(&self, square: Square) -> (u32, u32) {
        let file = u32::from(square.file());
        let rank = u32::from(square.rank());
        let (column, row) = match self.orientation {
            Orientation::WhiteBottom => (file, 7 - rank),
            Orientation::BlackBottom => (7 - file, rank),
        };
        (
            column.saturating_mul(self.square_size),
            row.saturating_mul(self.square_size),
        )
    }

    /// Center pixel of `square`
    pub fn square_center(&self, square: Square) -> (u32, u32) {
        let (x, y) = self.square_origin(square);
        let half = self.square_size / 2;
        (x.saturating_add(half), y.saturating_add(half))
    }
}
