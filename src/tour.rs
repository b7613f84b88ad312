use crate::board::{Square, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::TourViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete knight's tour: `size * size` distinct squares, each a knight
/// jump from the previous one. Index in `squares()` is the move number minus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTour")]
pub struct Tour {
    size: usize,
    squares: Vec<Square>,
}

#[derive(Deserialize)]
struct RawTour {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawTour> for Tour {
    type Error = TourViolation;
    fn try_from(raw: RawTour) -> Result<Self, Self::Error> { Tour::from_path(raw.size, raw.squares) }
}

/// Checks the full-tour invariants for `path` on a `size x size` board.
pub fn validate_path(size: usize, path: &[Square]) -> Result<(), TourViolation> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(TourViolation::BadSize { size, min: MIN_BOARD_SIZE, max: MAX_BOARD_SIZE });
    }
    let expected = size * size;
    if path.len() != expected {
        return Err(TourViolation::WrongLength { expected, actual: path.len() });
    }
    let mut seen = vec![false; expected];
    for (index, &square) in path.iter().enumerate() {
        if !square.in_bounds(size) { return Err(TourViolation::OffBoard { index, square }); }
        let i = square.index(size);
        if seen[i] { return Err(TourViolation::Repeated { index, square }); }
        seen[i] = true;
        if index > 0 {
            let from = path[index - 1];
            if !from.is_knight_move_to(square) {
                return Err(TourViolation::IllegalJump { index, from, to: square });
            }
        }
    }
    Ok(())
}

impl Tour {
    /// Wraps a path after checking it.
    pub fn from_path(size: usize, squares: Vec<Square>) -> Result<Self, TourViolation> {
        validate_path(size, &squares)?;
        Ok(Self { size, squares })
    }

    /// For paths the solver built itself; invariants hold by construction.
    pub(crate) fn from_solver(size: usize, squares: Vec<Square>) -> Self {
        debug_assert!(validate_path(size, &squares).is_ok());
        Self { size, squares }
    }

    pub fn size(&self) -> usize { self.size }
    pub fn squares(&self) -> &[Square] { &self.squares }
    pub fn len(&self) -> usize { self.squares.len() }
    pub fn is_empty(&self) -> bool { self.squares.is_empty() }
    pub fn start(&self) -> Square { self.squares[0] }
    pub fn end(&self) -> Square { self.squares[self.squares.len() - 1] }

    pub fn validate(&self) -> Result<(), TourViolation> { validate_path(self.size, &self.squares) }

    /// True when the last square attacks the first, so the tour is re-entrant.
    pub fn is_closed(&self) -> bool { self.end().is_knight_move_to(self.start()) }

    /// `grid[row][col]` is the 1-based move number on that square.
    pub fn move_number_grid(&self) -> Vec<Vec<u32>> {
        let mut grid = vec![vec![0u32; self.size]; self.size];
        for (i, sq) in self.squares.iter().enumerate() {
            grid[sq.row][sq.col] = i as u32 + 1;
        }
        grid
    }

    pub fn into_squares(self) -> Vec<Square> { self.squares }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size).to_string().len();
        for row in self.move_number_grid() {
            let cells: Vec<String> = row.iter().map(|n| format!("{n:>width$}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
