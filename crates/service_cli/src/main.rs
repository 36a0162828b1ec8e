//! basketmc - Basket-Option Monte Carlo Pricing CLI
//!
//! Operational entry point for the basket-option pricing engine.
//!
//! # Commands
//!
//! - `basketmc price --portfolio <file>` - Price a basket option over a
//!   portfolio CSV under one of three scheduling disciplines
//! - `basketmc check --portfolio <file>` - Validate a portfolio file
//!   without running any simulation
//!
//! # Architecture
//!
//! As the **S**ervice layer in the A-P-S split, this crate orchestrates
//! the adapter (portfolio CSV in, payoff sample out) and the pricing
//! kernel behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Basket-option Monte Carlo pricing CLI
#[derive(Parser)]
#[command(name = "basketmc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a basket option by Monte Carlo simulation
    Price(commands::price::PriceArgs),

    /// Validate a portfolio file without running any simulation
    Check {
        /// Path to the portfolio CSV file
        #[arg(short, long, default_value = "portfolio.csv")]
        portfolio: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price(args) => commands::price::run(args),
        Commands::Check { portfolio } => commands::check::run(&portfolio),
    }
}
