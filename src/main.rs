use anyhow::{Context, Result};
use clap::Parser;
use knights_tour::search::DEFAULT_MAX_ATTEMPTS;
use knights_tour::{SolveError, SolveParams, Square, TourSolver};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find a knight's tour with Warnsdorff's rule", long_about = None)]
struct Args {
    /// Board size (n for an n x n board, minimum 5)
    #[arg(long, default_value_t = 5)]
    size: usize,

    /// Start row (0-indexed)
    #[arg(long, default_value_t = 0)]
    row: usize,

    /// Start column (0-indexed)
    #[arg(long, default_value_t = 0)]
    col: usize,

    /// Maximum number of randomized attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Tie-break seed for reproducible tours
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many milliseconds
    #[arg(long)]
    movetime_ms: Option<u64>,

    /// Print the tour as JSON instead of a numbered grid
    #[arg(long)]
    json: bool,

    /// Print search statistics to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = SolveParams {
        max_attempts: args.attempts,
        seed: args.seed,
        movetime: args.movetime_ms.map(Duration::from_millis),
        ..SolveParams::default()
    };
    let mut solver = TourSolver::new(params);
    let start = Square::new(args.row, args.col);

    let t0 = Instant::now();
    let result = solver.solve(args.size, start);
    let dt = t0.elapsed();
    if args.verbose {
        let st = solver.stats();
        eprintln!(
            "attempts={} dead_ends={} nodes={} degree_evals={} longest={} elapsed={:.3}s",
            st.attempts, st.dead_ends, st.nodes, st.degree_evals, st.longest, dt.as_secs_f64()
        );
    }

    match result {
        Ok(tour) => {
            if args.json {
                println!("{}", serde_json::to_string(&tour).context("serialize tour")?);
            } else {
                print!("{tour}");
            }
            Ok(())
        }
        Err(SolveError::Exhausted(ex)) => {
            if let Some(partial) = ex.longest_partial.as_ref() {
                eprintln!("longest partial path covered {} of {} squares", partial.len(), args.size * args.size);
            }
            anyhow::bail!("no complete knight's tour found from {start} after {} attempts; try another start square", ex.attempts)
        }
        Err(e) => Err(e).context("solve failed"),
    }
}
