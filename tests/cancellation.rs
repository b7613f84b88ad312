use knights_tour::{CancelToken, SolveError, SolveParams, Square, TourSolver};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

// From (0,1) a 5x5 tour is impossible, so these searches only end by budget or cancellation.
const UNSOLVABLE: Square = Square::new(0, 1);

#[test]
fn cancelled_before_start_runs_no_attempt() {
    let token = CancelToken::new();
    token.cancel();
    let mut s = TourSolver::new(SolveParams::default());
    s.set_cancel_token(Some(token));
    let t0 = Instant::now();
    let res = s.solve(8, Square::new(0, 0));
    assert_eq!(res, Err(SolveError::Cancelled { attempts: 0 }));
    assert_eq!(s.stats().attempts, 0);
    assert!(t0.elapsed() < Duration::from_millis(100));
}

#[test]
fn cancel_from_another_thread_stops_the_search() {
    let flag = Arc::new(AtomicBool::new(false));
    let token = CancelToken::from_flag(flag.clone());
    let mut s = TourSolver::new(SolveParams { max_attempts: u32::MAX, seed: Some(1), ..SolveParams::default() });
    s.set_cancel_token(Some(token.clone()));
    let t0 = Instant::now();
    let res = std::thread::scope(|scope| {
        scope.spawn(|| {
            std::thread::sleep(Duration::from_millis(30));
            token.cancel();
        });
        s.solve(5, UNSOLVABLE)
    });
    assert!(matches!(res, Err(SolveError::Cancelled { attempts }) if attempts > 0), "got {res:?}");
    assert!(t0.elapsed() < Duration::from_secs(5));
}

#[test]
fn movetime_expiry_reports_cancellation() {
    let mut s = TourSolver::new(SolveParams {
        max_attempts: u32::MAX,
        seed: Some(2),
        movetime: Some(Duration::from_millis(20)),
        keep_longest_partial: false,
    });
    let t0 = Instant::now();
    let res = s.solve(5, UNSOLVABLE);
    assert!(res.unwrap_err().is_cancelled());
    assert!(t0.elapsed() < Duration::from_secs(5));
}

#[test]
fn reset_token_allows_a_new_solve() {
    let token = CancelToken::new();
    token.cancel();
    let mut s = TourSolver::new(SolveParams { seed: Some(3), max_attempts: 1000, ..SolveParams::default() });
    s.set_cancel_token(Some(token.clone()));
    assert!(s.solve(5, Square::new(0, 0)).unwrap_err().is_cancelled());
    token.reset();
    assert!(s.solve(5, Square::new(0, 0)).is_ok());
}

#[test]
fn stopped_walk_still_reports_its_progress() {
    // A 2000x2000 walk cannot finish in 50ms, so the deadline lands mid-attempt
    let mut s = TourSolver::new(SolveParams {
        max_attempts: 1,
        seed: Some(5),
        movetime: Some(Duration::from_millis(50)),
        keep_longest_partial: false,
    });
    let res = s.solve(2000, Square::new(0, 0));
    assert_eq!(res, Err(SolveError::Cancelled { attempts: 1 }));
    let st = s.stats();
    assert_eq!(st.dead_ends, 0);
    assert!(st.longest > 1, "longest={} nodes={}", st.longest, st.nodes);
    assert_eq!(st.longest as u64, st.nodes);
}
