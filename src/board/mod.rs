pub mod square;
pub mod visited;

pub use square::{knight_targets, Square, KNIGHT_OFFSETS};
pub use visited::VisitedSet;

/// Smallest board accepted by the solver.
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board accepted; keeps every move number inside `u32`.
pub const MAX_BOARD_SIZE: usize = 4096;
