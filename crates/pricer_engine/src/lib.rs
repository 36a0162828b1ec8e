//! # Pricer Engine (Layer P: Simulation Kernel)
//!
//! Monte Carlo basket-option pricing engine built around three
//! interchangeable scheduling disciplines:
//!
//! - **Sequential** — one execution unit, tasks in index order; the
//!   correctness baseline.
//! - **Worker pool** — a fixed number of threads draining a pre-loaded
//!   FIFO task queue.
//! - **Work stealing** — per-worker deques with round-robin static
//!   distribution, LIFO owner pops and FIFO steals.
//!
//! The disciplines share the leaf components — GBM path generation,
//! payoff evaluation and order-stable aggregation — so they agree on
//! pricing semantics and differ only in how tasks reach a worker.
//!
//! ## Randomness and reproducibility
//!
//! Each execution unit owns a private stream seeded `base_seed +
//! worker_id`; streams never migrate, even when a task is stolen. Output
//! is bit-for-bit reproducible for a fixed `(strategy, worker count,
//! base seed, task assignment)` and deliberately *not* comparable across
//! worker counts or disciplines.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_engine::config::{EngineConfig, Strategy};
//! use pricer_engine::portfolio::{Asset, Portfolio};
//! use pricer_engine::sample::sample_payoffs;
//! use pricer_engine::schedule::run;
//!
//! let portfolio = Portfolio::new(vec![
//!     Asset::new("AAA", 1200.0, 0.5, 0.05, 0.2).unwrap(),
//!     Asset::new("BBB", 1800.0, 0.5, 0.03, 0.25).unwrap(),
//! ])
//! .unwrap();
//!
//! let config = EngineConfig::builder()
//!     .strategy(Strategy::WorkerPool)
//!     .strike(1500.0)
//!     .n_simulations(2_000)
//!     .n_steps(50)
//!     .n_workers(4)
//!     .build()
//!     .unwrap();
//!
//! let outcome = run(&portfolio, &config).unwrap();
//! let sample = sample_payoffs(&outcome.payoffs, config.sample_size(), config.sample_seed());
//! assert!(outcome.price >= 0.0);
//! assert!(sample.len() <= config.sample_size());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod path;
pub mod payoff;
pub mod portfolio;
pub mod rng;
pub mod sample;
pub mod schedule;


// Re-exports for convenient access
pub use aggregate::{PayoffAccumulator, PayoffRecord};
pub use config::{EngineConfig, EngineConfigBuilder, Strategy};
pub use error::{EngineError, Result};
pub use payoff::OptionKind;
pub use portfolio::{Asset, Portfolio};
pub use sample::sample_payoffs;
pub use schedule::{run, SimulationOutcome};
