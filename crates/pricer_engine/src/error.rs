//! Error types for the simulation engine.
//!
//! Three failure groups exist, mirroring the engine contract:
//!
//! - **Configuration** errors: rejected before any work is scheduled
//!   (bad counts, unparseable strategy or option kind).
//! - **Data** errors: portfolio shape problems, also rejected up front.
//! - **Aggregation protocol** violations: a task index reported twice,
//!   out of range, or never at all. These are internal-consistency
//!   failures and abort the run; no partial results are returned.

use thiserror::Error;

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors produced by configuration validation, portfolio construction
/// and result aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Simulation count must be at least 1.
    #[error("invalid simulation count {0}: must be at least 1")]
    InvalidSimulationCount(usize),

    /// Worker count must be at least 1 for the parallel disciplines.
    #[error("invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),

    /// Maturity must be positive and finite.
    #[error("invalid maturity {0}: must be positive and finite")]
    InvalidMaturity(f64),

    /// Catch-all for invalid scalar parameters (strike, rate, asset fields).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Strategy text did not name a known scheduling discipline.
    #[error("unknown scheduling strategy '{0}': expected sequential, pool or stealing")]
    UnknownStrategy(String),

    /// Option-kind text was neither `call` nor `put`.
    ///
    /// The engine fails fast here instead of silently pricing every
    /// trial at zero payoff.
    #[error("unknown option kind '{0}': expected call or put")]
    UnknownOptionKind(String),

    /// A portfolio needs at least one asset.
    #[error("empty portfolio: at least one asset is required")]
    EmptyPortfolio,

    /// Parallel parameter columns must all have the same length.
    #[error(
        "portfolio column length mismatch: spots={spots}, weights={weights}, \
         drifts={drifts}, volatilities={volatilities}"
    )]
    ColumnLengthMismatch {
        /// Length of the initial-price column.
        spots: usize,
        /// Length of the weight column.
        weights: usize,
        /// Length of the drift column.
        drifts: usize,
        /// Length of the volatility column.
        volatilities: usize,
    },

    /// A worker reported a task index outside `0..simulations`.
    #[error("aggregation protocol violation: task index {index} out of range for {expected} simulations")]
    AggregationIndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Expected number of simulations.
        expected: usize,
    },

    /// The same task index was reported more than once.
    #[error("aggregation protocol violation: duplicate payoff for task index {0}")]
    AggregationDuplicateIndex(usize),

    /// The result stream ended before every task index was reported.
    #[error("aggregation protocol violation: received {received} of {expected} payoffs")]
    AggregationIncomplete {
        /// Number of payoffs received.
        received: usize,
        /// Number of payoffs expected.
        expected: usize,
    },
}
