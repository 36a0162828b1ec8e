//! Price command implementation.
//!
//! Loads the portfolio, runs the simulation under the requested
//! scheduling discipline, prints the price, and exports the payoff
//! sample for downstream plotting.

use std::time::Instant;

use clap::Args;
use tracing::info;

use adapter_portfolio::{load_portfolio, write_payoff_sample};
use pricer_engine::{sample_payoffs, schedule, EngineConfig, OptionKind, Strategy};

use crate::{CliError, Result};

/// Arguments for `basketmc price`.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Path to the portfolio CSV file
    #[arg(short, long, default_value = "portfolio.csv")]
    pub portfolio: String,

    /// Scheduling discipline: sequential, pool or stealing
    #[arg(short, long, default_value = "pool")]
    pub mode: String,

    /// Strike price (K)
    #[arg(short = 'K', long, default_value = "2000")]
    pub strike: f64,

    /// Risk-free rate (r)
    #[arg(short, long, default_value = "0.05")]
    pub rate: f64,

    /// Time to maturity in years (T)
    #[arg(short = 'T', long, default_value = "1.0")]
    pub maturity: f64,

    /// Number of time steps per path
    #[arg(long, default_value = "252")]
    pub steps: usize,

    /// Number of Monte Carlo simulations
    #[arg(short, long, default_value = "10000")]
    pub simulations: usize,

    /// Number of workers for the parallel disciplines
    #[arg(short, long, default_value = "4")]
    pub workers: usize,

    /// Option type: call or put
    #[arg(short = 't', long = "type", default_value = "call")]
    pub option_type: String,

    /// Base seed; worker i runs stream seed + i
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Number of payoffs exported for reporting
    #[arg(long, default_value = "1000")]
    pub sample_size: usize,

    /// Explicit sampler seed (derived from --seed when omitted)
    #[arg(long)]
    pub sample_seed: Option<u64>,

    /// Output path for the payoff-sample CSV
    #[arg(short, long, default_value = "results/payoff_distribution.csv")]
    pub output: String,
}

/// Run the price command.
pub fn run(args: PriceArgs) -> Result<()> {
    if !std::path::Path::new(&args.portfolio).exists() {
        return Err(CliError::FileNotFound(args.portfolio));
    }

    let strategy: Strategy = args.mode.parse()?;
    let option_kind: OptionKind = args.option_type.parse()?;

    let mut builder = EngineConfig::builder()
        .strategy(strategy)
        .option_kind(option_kind)
        .strike(args.strike)
        .rate(args.rate)
        .maturity(args.maturity)
        .n_steps(args.steps)
        .n_simulations(args.simulations)
        .n_workers(args.workers)
        .base_seed(args.seed)
        .sample_size(args.sample_size);
    if let Some(sample_seed) = args.sample_seed {
        builder = builder.sample_seed(sample_seed);
    }
    let config = builder.build()?;

    let portfolio = load_portfolio(&args.portfolio)?;

    let start = Instant::now();
    let outcome = schedule::run(&portfolio, &config)?;
    let elapsed = start.elapsed();

    let sample = sample_payoffs(&outcome.payoffs, config.sample_size(), config.sample_seed());
    write_payoff_sample(&args.output, &sample)?;

    info!(
        strategy = %config.strategy(),
        elapsed_ms = elapsed.as_millis() as u64,
        sample = sample.len(),
        "pricing complete"
    );
    println!("Basket Option Price: ${:.2}", outcome.price);
    println!("Execution Time ({}): {:.3?}", config.strategy(), elapsed);

    Ok(())
}
