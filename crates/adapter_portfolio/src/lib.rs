//! # Portfolio Adapter (Layer A: Input/Output)
//!
//! Tabular glue around the pricing kernel:
//!
//! - [`loader`] reads the five-column portfolio CSV
//!   (`name,initial_price,weight,mean_return,volatility`) into a
//!   [`pricer_engine::Portfolio`], parsing numbers strictly.
//! - [`report`] writes the exported payoff sample, one fixed-precision
//!   value per line.
//!
//! The engine itself never touches files; everything path-shaped lives
//! here or in the service layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod loader;
pub mod report;

// Re-exports for convenient access
pub use error::{AdapterError, Result};
pub use loader::load_portfolio;
pub use report::write_payoff_sample;
