// Knight's tour search: Warnsdorff's rule with random tie-breaks and restarts
pub mod board;
pub mod error;
pub mod search;
pub mod tour;

pub use board::{Square, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{Exhausted, InputError, SolveError, TourViolation};
pub use search::{solve, validate_request, CancelToken, SolveParams, SolveStats, TourSolver};
pub use tour::{validate_path, Tour};
