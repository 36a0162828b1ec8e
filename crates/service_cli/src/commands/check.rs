//! Check command implementation.
//!
//! Validates a portfolio file without scheduling any work: the same
//! strict loader the price command uses, minus the simulation.

use tracing::info;

use adapter_portfolio::load_portfolio;

use crate::{CliError, Result};

/// Run the check command.
pub fn run(portfolio: &str) -> Result<()> {
    if !std::path::Path::new(portfolio).exists() {
        return Err(CliError::FileNotFound(portfolio.to_string()));
    }

    let loaded = load_portfolio(portfolio)?;
    info!(assets = loaded.len(), "portfolio is valid");

    println!("Portfolio OK: {} asset(s)", loaded.len());
    for asset in loaded.assets() {
        println!(
            "  {:<12} S0={:<10.4} w={:<8.4} mu={:<8.4} sigma={:.4}",
            asset.name, asset.spot, asset.weight, asset.drift, asset.volatility
        );
    }
    Ok(())
}
