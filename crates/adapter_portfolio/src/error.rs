//! Error types for portfolio input and report output.

use thiserror::Error;

/// Convenience alias used throughout the adapter.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors produced while reading portfolio tables or writing reports.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Underlying file-system failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural CSV failure (bad quoting, inconsistent record length).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row did not have exactly the fields the schema requires.
    #[error("row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based data-row number (excluding the header).
        row: usize,
        /// Fields required by the schema.
        expected: usize,
        /// Fields present in the row.
        found: usize,
    },

    /// A numeric field failed strict parsing.
    ///
    /// Lenient parse-to-zero is deliberately not supported: a malformed
    /// number in an input table is an input error, not a zero.
    #[error("row {row}, column '{column}': cannot parse '{value}' as a number")]
    InvalidField {
        /// 1-based data-row number (excluding the header).
        row: usize,
        /// Schema column name.
        column: &'static str,
        /// Offending field text.
        value: String,
    },

    /// The loaded rows did not form a valid portfolio.
    #[error("invalid portfolio: {0}")]
    InvalidPortfolio(#[from] pricer_engine::EngineError),
}
