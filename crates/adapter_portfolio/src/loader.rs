//! Portfolio CSV loader.
//!
//! Reads the fixed five-column table
//! `name,initial_price,weight,mean_return,volatility` — a header row
//! followed by one asset per row. Columns are positional; the header is
//! skipped, not matched by name. Numeric fields are parsed strictly: a
//! malformed number aborts the load instead of degrading to zero.

use std::path::Path;

use tracing::info;

use pricer_engine::{Asset, Portfolio};

use crate::error::{AdapterError, Result};

/// Number of columns in the portfolio schema.
const SCHEMA_FIELDS: usize = 5;

/// Schema column names, in table order (after `name`).
const NUMERIC_COLUMNS: [&str; 4] = ["initial_price", "weight", "mean_return", "volatility"];

/// Loads a portfolio from a CSV file.
///
/// # Errors
///
/// Fails on I/O problems, malformed CSV, rows without exactly five
/// fields, unparseable numbers, or rows that do not form a valid
/// portfolio (empty table, non-positive prices, negative volatilities).
pub fn load_portfolio(path: impl AsRef<Path>) -> Result<Portfolio> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut assets = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        if record.len() != SCHEMA_FIELDS {
            return Err(AdapterError::MalformedRow {
                row,
                expected: SCHEMA_FIELDS,
                found: record.len(),
            });
        }

        let name = record[0].to_string();
        let mut numbers = [0.0_f64; NUMERIC_COLUMNS.len()];
        for (j, column) in NUMERIC_COLUMNS.iter().enumerate() {
            let raw = record[j + 1].trim();
            numbers[j] = raw.parse().map_err(|_| AdapterError::InvalidField {
                row,
                column,
                value: raw.to_string(),
            })?;
        }
        let [spot, weight, drift, volatility] = numbers;
        assets.push(Asset::new(name, spot, weight, drift, volatility)?);
    }

    let portfolio = Portfolio::new(assets)?;
    info!(
        path = %path.display(),
        assets = portfolio.len(),
        "loaded portfolio"
    );
    Ok(portfolio)
}
