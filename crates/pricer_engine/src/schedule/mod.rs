//! Simulation scheduling and execution.
//!
//! Three interchangeable disciplines share the same observable contract:
//! given a portfolio and a validated [`EngineConfig`], produce the
//! discounted expected payoff and the dense, index-ordered payoff vector.
//!
//! - [`Strategy::Sequential`] — one worker, tasks in index order; the
//!   correctness baseline.
//! - [`Strategy::WorkerPool`] — a fixed pool draining a pre-loaded FIFO
//!   task queue.
//! - [`Strategy::WorkStealing`] — round-robin static distribution over
//!   per-worker deques with LIFO owner pops and FIFO steals.
//!
//! All three share the leaf components (path generation, payoff
//! evaluation, aggregation), so the disciplines cannot drift apart in
//! pricing semantics — only in how tasks reach a worker.
//!
//! # Determinism
//!
//! For a fixed `(strategy, worker count, base seed, task assignment)`
//! the output is bit-for-bit reproducible. When the assignment itself is
//! decided by scheduling races — the multi-worker pool and stealing
//! disciplines — repeated runs are statistically, not bitwise,
//! comparable; nor is output comparable across differing worker counts
//! or strategies, because the task-to-stream mapping changes.

mod pool;
mod sequential;
mod stealing;

use tracing::info;

use crate::config::{EngineConfig, Strategy};
use crate::error::Result;
use crate::path::generate_path;
use crate::portfolio::Portfolio;
use crate::rng::WorkerRng;

/// Result of one full simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationOutcome {
    /// Discounted expected payoff: `exp(-rT) × mean(payoffs)`.
    pub price: f64,
    /// Dense payoff vector; entry `i` is the payoff of task `i`.
    pub payoffs: Vec<f64>,
}

/// Runs the configured number of simulations under the configured
/// scheduling discipline.
///
/// The run is all-or-nothing: any configuration, data or aggregation
/// failure aborts with an error and no partial results. The engine has
/// no internal cancellation; a caller needing cancellation should wrap
/// this call externally.
///
/// # Errors
///
/// Propagates validation failures and aggregation protocol violations.
///
/// # Examples
///
/// ```rust
/// use pricer_engine::config::{EngineConfig, Strategy};
/// use pricer_engine::portfolio::{Asset, Portfolio};
/// use pricer_engine::schedule::run;
///
/// let portfolio = Portfolio::new(vec![
///     Asset::new("AAA", 1000.0, 1.0, 0.05, 0.2).unwrap(),
///     Asset::new("BBB", 1500.0, 1.0, 0.03, 0.25).unwrap(),
/// ])
/// .unwrap();
///
/// let config = EngineConfig::builder()
///     .strategy(Strategy::Sequential)
///     .n_simulations(1000)
///     .n_steps(50)
///     .build()
///     .unwrap();
///
/// let outcome = run(&portfolio, &config).unwrap();
/// assert_eq!(outcome.payoffs.len(), 1000);
/// assert!(outcome.price >= 0.0);
/// ```
pub fn run(portfolio: &Portfolio, config: &EngineConfig) -> Result<SimulationOutcome> {
    config.validate()?;

    info!(
        strategy = %config.strategy(),
        simulations = config.n_simulations(),
        steps = config.n_steps(),
        workers = config.n_workers(),
        assets = portfolio.len(),
        "starting simulation run"
    );

    let payoffs = match config.strategy() {
        Strategy::Sequential => sequential::run(portfolio, config)?,
        Strategy::WorkerPool => pool::run(portfolio, config)?,
        Strategy::WorkStealing => stealing::run(portfolio, config)?,
    };

    let mean = payoffs.iter().sum::<f64>() / payoffs.len() as f64;
    let price = config.discount_factor() * mean;

    info!(price, "simulation run complete");
    Ok(SimulationOutcome { price, payoffs })
}

/// Executes one Monte Carlo trial: a path per asset, weighted into the
/// basket value, then the option payoff.
///
/// Each path is private to the executing worker and discarded once its
/// terminal price has been read.
fn simulate_trial(portfolio: &Portfolio, config: &EngineConfig, rng: &mut WorkerRng) -> f64 {
    let mut basket_value = 0.0;
    for asset in portfolio.assets() {
        let path = generate_path(
            asset.spot,
            asset.drift,
            asset.volatility,
            config.maturity(),
            config.n_steps(),
            rng,
        );
        let terminal = path.last().copied().unwrap_or(asset.spot);
        basket_value += asset.weight * terminal;
    }
    config.option_kind().payoff(basket_value, config.strike())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::OptionKind;
    use crate::portfolio::Asset;

    fn test_portfolio() -> Portfolio {
        Portfolio::new(vec![
            Asset::new("AAA", 1000.0, 1.0, 0.05, 0.0).unwrap(),
            Asset::new("BBB", 500.0, 2.0, 0.05, 0.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_simulate_trial_deterministic_portfolio() {
        // σ = 0 for every asset: basket value is exactly
        // (1000 + 2×500)·exp(0.05) = 2000·exp(0.05).
        let portfolio = test_portfolio();
        let config = EngineConfig::builder()
            .strike(2000.0)
            .n_simulations(1)
            .build()
            .unwrap();
        let mut rng = WorkerRng::from_seed(42);
        let payoff = simulate_trial(&portfolio, &config, &mut rng);
        let expected = 2000.0 * (0.05_f64).exp() - 2000.0;
        assert!((payoff - expected).abs() < 1e-9);
    }

    #[test]
    fn test_simulate_trial_put_on_deterministic_input_is_zero() {
        let portfolio = test_portfolio();
        let config = EngineConfig::builder()
            .strike(2000.0)
            .option_kind(OptionKind::Put)
            .n_simulations(1)
            .build()
            .unwrap();
        let mut rng = WorkerRng::from_seed(42);
        // Terminal value exceeds the strike, so the put is worthless.
        assert_eq!(simulate_trial(&portfolio, &config, &mut rng), 0.0);
    }

    #[test]
    fn test_run_zero_steps_prices_spot_basket() {
        let portfolio = test_portfolio();
        let config = EngineConfig::builder()
            .strike(1500.0)
            .rate(0.0)
            .n_steps(0)
            .n_simulations(10)
            .build()
            .unwrap();
        let outcome = run(&portfolio, &config).unwrap();
        // Single-point paths: basket value is exactly 2000 in every trial.
        assert_eq!(outcome.price, 500.0);
        assert!(outcome.payoffs.iter().all(|&p| p == 500.0));
    }
}
