use crate::board::{Square, VisitedSet, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{Exhausted, InputError, SolveError};
use crate::search::cancel::CancelToken;
use crate::search::degree::{candidates, min_degree_subset};
use crate::search::tiebreak::choose_uniform;
use crate::tour::Tour;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Attempt budget used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

// Clock reads are amortized over this many placed squares.
const DEADLINE_CHECK_MASK: u64 = 1023;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveParams {
    pub max_attempts: u32,
    /// Fixed tie-break seed; every solve restarts from it. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Wall-clock limit; expiry is reported as cancellation.
    pub movetime: Option<Duration>,
    /// Keep the longest dead-end path for the exhaustion report.
    pub keep_longest_partial: bool,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS, seed: None, movetime: None, keep_longest_partial: true }
    }
}

/// Counters for the most recent solve.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    pub attempts: u32,
    pub dead_ends: u32,
    /// Squares placed across all attempts.
    pub nodes: u64,
    /// Candidate degree computations.
    pub degree_evals: u64,
    /// Longest path length reached by any attempt.
    pub longest: usize,
}

enum Walk {
    Complete(Vec<Square>),
    DeadEnd(Vec<Square>),
    Stopped,
}

/// Warnsdorff walker with random tie-breaks and restart on dead ends.
#[derive(Debug, Default)]
pub struct TourSolver {
    params: SolveParams,
    cancel: Option<CancelToken>,
    stats: SolveStats,
}

/// Rejects requests that cannot be searched.
pub fn validate_request(size: usize, start: Square, params: &SolveParams) -> Result<(), InputError> {
    if size < MIN_BOARD_SIZE { return Err(InputError::BoardTooSmall { size, min: MIN_BOARD_SIZE }); }
    if size > MAX_BOARD_SIZE { return Err(InputError::BoardTooLarge { size, max: MAX_BOARD_SIZE }); }
    if !start.in_bounds(size) {
        return Err(InputError::StartOutOfBounds { row: start.row, col: start.col, size });
    }
    if params.max_attempts == 0 { return Err(InputError::NoAttempts); }
    Ok(())
}

/// One-shot solve with its own solver.
pub fn solve(size: usize, start: Square, params: &SolveParams) -> Result<Tour, SolveError> {
    TourSolver::new(*params).solve(size, start)
}

impl TourSolver {
    pub fn new(params: SolveParams) -> Self { Self { params, cancel: None, stats: SolveStats::default() } }

    pub fn params(&self) -> &SolveParams { &self.params }
    pub fn stats(&self) -> SolveStats { self.stats }

    pub fn set_max_attempts(&mut self, n: u32) { self.params.max_attempts = n; }
    pub fn set_seed(&mut self, seed: Option<u64>) { self.params.seed = seed; }
    pub fn set_movetime(&mut self, t: Option<Duration>) { self.params.movetime = t; }
    pub fn set_cancel_token(&mut self, token: Option<CancelToken>) { self.cancel = token; }

    /// Searches for a tour from `start` on a `size x size` board.
    pub fn solve(&mut self, size: usize, start: Square) -> Result<Tour, SolveError> {
        let mut rng = match self.params.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        self.solve_with_rng(size, start, &mut rng)
    }

    /// Like [`solve`](Self::solve) but draws tie-breaks from a caller-owned generator.
    pub fn solve_with_rng<R: Rng + ?Sized>(&mut self, size: usize, start: Square, rng: &mut R) -> Result<Tour, SolveError> {
        self.stats = SolveStats::default();
        validate_request(size, start, &self.params)?;

        let deadline = self.params.movetime.map(|t| Instant::now() + t);
        let mut visited = VisitedSet::new(size);
        let mut longest: Option<Vec<Square>> = None;

        for attempt in 0..self.params.max_attempts {
            if self.cancelled() || deadline.map_or(false, |d| Instant::now() >= d) {
                debug!("solve stopped before attempt {}", attempt + 1);
                return Err(SolveError::Cancelled { attempts: self.stats.attempts });
            }
            self.stats.attempts += 1;
            visited.clear();
            match self.walk(start, &mut visited, rng, deadline) {
                Walk::Complete(path) => {
                    info!("tour found on {size}x{size} from {start} after {} attempts", self.stats.attempts);
                    return Ok(Tour::from_solver(size, path));
                }
                Walk::DeadEnd(path) => {
                    self.stats.dead_ends += 1;
                    debug!("attempt {} dead-ended at {} of {} squares", attempt + 1, path.len(), size * size);
                    if self.params.keep_longest_partial && longest.as_ref().map_or(true, |l| path.len() > l.len()) {
                        longest = Some(path);
                    }
                }
                Walk::Stopped => {
                    debug!("solve stopped during attempt {}", attempt + 1);
                    return Err(SolveError::Cancelled { attempts: self.stats.attempts });
                }
            }
        }

        warn!("no tour on {size}x{size} from {start} within {} attempts", self.stats.attempts);
        Err(SolveError::Exhausted(Exhausted { attempts: self.stats.attempts, longest_partial: longest }))
    }

    fn cancelled(&self) -> bool { self.cancel.as_ref().map_or(false, |c| c.is_cancelled()) }

    // One greedy walk. `visited` must be clear on entry.
    fn walk<R: Rng + ?Sized>(&mut self, start: Square, visited: &mut VisitedSet, rng: &mut R, deadline: Option<Instant>) -> Walk {
        let total = visited.size() * visited.size();
        let mut path = Vec::with_capacity(total);
        visited.mark(start);
        path.push(start);
        self.stats.nodes += 1;
        let mut cur = start;

        while path.len() < total {
            let expired = deadline.map_or(false, |d| self.stats.nodes & DEADLINE_CHECK_MASK == 0 && Instant::now() >= d);
            if expired || self.cancelled() {
                self.stats.longest = self.stats.longest.max(path.len());
                return Walk::Stopped;
            }

            let cands = candidates(cur, visited);
            self.stats.degree_evals += cands.len() as u64;
            let next = min_degree_subset(&cands, visited).and_then(|(_, ties)| choose_uniform(&ties, rng));
            let Some(next) = next else {
                self.stats.longest = self.stats.longest.max(path.len());
                return Walk::DeadEnd(path);
            };

            visited.mark(next);
            path.push(next);
            self.stats.nodes += 1;
            cur = next;
        }

        self.stats.longest = total;
        Walk::Complete(path)
    }
}
