//! Payoff-sample report writer.
//!
//! Renders a payoff sample as one fixed-precision decimal value per
//! line, the format consumed by the downstream distribution-plot
//! tooling.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Decimal places used for exported payoffs.
const PAYOFF_PRECISION: usize = 6;

/// Writes the payoff sample to `path`, one value per line.
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Fails on I/O or CSV-writer errors.
pub fn write_payoff_sample(path: impl AsRef<Path>, sample: &[f64]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for value in sample {
        writer.write_record([format!("{value:.prec$}", prec = PAYOFF_PRECISION)])?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        values = sample.len(),
        "exported payoff sample"
    );
    Ok(())
}
