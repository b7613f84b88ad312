use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight knight jumps as (row delta, col delta).
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1), (-1, -2), (1, -2), (2, -1),
    (2, 1), (1, 2), (-1, 2), (-2, 1),
];

/// A board square addressed by zero-based `(row, col)`.
///
/// Serializes as a two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    pub fn in_bounds(self, size: usize) -> bool { self.row < size && self.col < size }

    /// Row-major index into an `n*n` table.
    pub fn index(self, size: usize) -> usize { self.row * size + self.col }

    /// Applies a jump, returning `None` when it leaves the board.
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Square> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let sq = Square { row, col };
        if sq.in_bounds(size) { Some(sq) } else { None }
    }

    /// True if `other` is exactly one knight jump away.
    pub fn is_knight_move_to(self, other: Square) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        matches!((dr, dc), (1, 2) | (2, 1))
    }

    /// Light or dark; knights always change color.
    pub fn parity(self) -> usize { (self.row + self.col) % 2 }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self { Square { row, col } }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self { (sq.row, sq.col) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// All on-board squares one knight jump from `from`, in `KNIGHT_OFFSETS` order.
pub fn knight_targets(size: usize, from: Square) -> impl Iterator<Item = Square> + Clone {
    KNIGHT_OFFSETS.iter().filter_map(move |&(dr, dc)| from.offset(dr, dc, size))
}
