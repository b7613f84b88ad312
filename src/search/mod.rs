pub mod cancel;
pub mod degree;
pub mod tiebreak;
pub mod warnsdorff;

pub use cancel::CancelToken;
pub use warnsdorff::{solve, validate_request, SolveParams, SolveStats, TourSolver, DEFAULT_MAX_ATTEMPTS};
