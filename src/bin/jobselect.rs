use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use u_jobselect::config::ProblemConfig;
use u_jobselect::generator::JobGenerator;
use u_jobselect::models::JobIdSequence;
use u_jobselect::render::render_timeline;
use u_jobselect::solver::{ExactSolver, SearchStrategy};
use u_jobselect::validation::{check_feasibility, validate_jobs};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Memoized include/exclude search
    Memo,
    /// Weighted interval scheduling DP
    Dp,
}

impl From<Strategy> for SearchStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Memo => SearchStrategy::Memoized,
            Strategy::Dp => SearchStrategy::IntervalDp,
        }
    }
}

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Selects the most profitable set of non-overlapping random jobs", long_about = None)]
struct Args {
    /// Seed for the job generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of jobs to generate
    #[arg(short, long, default_value_t = ProblemConfig::default().job_count)]
    jobs: usize,

    /// Planning horizon in time slots
    #[arg(long, default_value_t = ProblemConfig::default().horizon)]
    horizon: i64,

    /// Search algorithm
    #[arg(long, value_enum, default_value_t = Strategy::Memo)]
    strategy: Strategy,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> u_jobselect::Result<()> {
    let config = ProblemConfig::new()
        .with_job_count(args.jobs)
        .with_horizon(args.horizon);
    let generator = JobGenerator::new(config.clone())?;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let jobs = generator.generate(&mut JobIdSequence::new(), &mut rng)?;
    if let Err(errors) = validate_jobs(&jobs, &config) {
        for e in &errors {
            eprintln!("invalid input: {}", e.message);
        }
    }

    let started = Instant::now();
    let solution = ExactSolver::new()
        .with_strategy(args.strategy.into())
        .solve(&jobs)?;
    println!("Elapsed time: {:.6}", started.elapsed().as_secs_f64());

    print!("{solution}");
    match check_feasibility(&solution) {
        Ok(()) => println!("Feasible: yes"),
        Err(errors) => {
            println!("Feasible: no");
            for e in &errors {
                println!("  {}", e.message);
            }
        }
    }
    println!("{}", render_timeline(&solution, config.horizon));

    Ok(())
}
