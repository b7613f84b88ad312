use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use knights_tour::search::DEFAULT_MAX_ATTEMPTS;
use knights_tour::{validate_request, SolveParams, Square, TourSolver};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "sweep", about = "Solve from every start square of a board and report which succeed")]
struct Args {
    /// Board size
    #[arg(long, default_value_t = 5)]
    size: usize,

    /// Attempt budget per start square
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Base seed; each square derives its own
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Worker threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

struct Outcome {
    start: Square,
    solved: bool,
    attempts: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = SolveParams { max_attempts: args.attempts, keep_longest_partial: false, ..SolveParams::default() };
    // Fail fast on a bad board size rather than once per square
    validate_request(args.size, Square::new(0, 0), &params)?;

    let starts: Vec<Square> = (0..args.size)
        .flat_map(|r| (0..args.size).map(move |c| Square::new(r, c)))
        .collect();

    let pb = ProgressBar::new(starts.len() as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} squares [{elapsed_precise}]")?);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let outcomes: Vec<Outcome> = pool.install(|| {
        starts.par_iter().enumerate().map(|(i, &start)| {
            let mut solver = TourSolver::new(SolveParams { seed: Some(args.seed ^ i as u64), ..params });
            let solved = solver.solve(args.size, start).is_ok();
            pb.inc(1);
            Outcome { start, solved, attempts: solver.stats().attempts }
        }).collect()
    });
    pb.finish_and_clear();

    for o in &outcomes {
        println!("start={} solved={} attempts={}", o.start, o.solved, o.attempts);
    }
    let solved = outcomes.iter().filter(|o| o.solved).count();
    println!("solved={}/{} elapsed={:.3}s", solved, outcomes.len(), t0.elapsed().as_secs_f64());
    Ok(())
}
