use crate::board::Square;
use thiserror::Error;

/// The request itself was invalid; no search was attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: usize, min: usize },
    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    #[error("start square ({row}, {col}) is outside a {size}x{size} board")]
    StartOutOfBounds { row: usize, col: usize, size: usize },
    #[error("attempt budget must be at least 1")]
    NoAttempts,
}

/// Every attempt dead-ended before covering the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhausted {
    pub attempts: u32,
    /// Longest dead-end path seen, kept for diagnostics only.
    pub longest_partial: Option<Vec<Square>>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("no tour found from this start within attempt budget ({} attempts)", .0.attempts)]
    Exhausted(Exhausted),
    #[error("search cancelled after {attempts} attempts")]
    Cancelled { attempts: u32 },
}

impl SolveError {
    pub fn is_input(&self) -> bool { matches!(self, SolveError::Input(_)) }
    pub fn is_exhausted(&self) -> bool { matches!(self, SolveError::Exhausted(_)) }
    pub fn is_cancelled(&self) -> bool { matches!(self, SolveError::Cancelled { .. }) }
}

/// A path that breaks one of the tour invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TourViolation {
    #[error("board size {size} is outside {min}..={max}")]
    BadSize { size: usize, min: usize, max: usize },
    #[error("expected {expected} squares, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("square {square} at move {index} is off the board")]
    OffBoard { index: usize, square: Square },
    #[error("square {square} repeats at move {index}")]
    Repeated { index: usize, square: Square },
    #[error("move {index} from {from} to {to} is not a knight jump")]
    IllegalJump { index: usize, from: Square, to: Square },
}
