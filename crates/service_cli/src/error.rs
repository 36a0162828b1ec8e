//! CLI error type.

use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// A referenced input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Failure from the pricing kernel.
    #[error(transparent)]
    Engine(#[from] pricer_engine::EngineError),

    /// Failure from portfolio loading or report writing.
    #[error(transparent)]
    Adapter(#[from] adapter_portfolio::AdapterError),
}
