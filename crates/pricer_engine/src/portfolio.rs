//! Portfolio model: an ordered collection of basket constituents.

use crate::error::{EngineError, Result};

/// One basket constituent.
///
/// The four numeric fields parameterise the asset's geometric Brownian
/// motion and its contribution to the basket value. Weights are used as
/// given; no normalisation is performed.
#[derive(Clone, Debug, PartialEq)]
pub struct Asset {
    /// Display name, carried through from the input table.
    pub name: String,
    /// Initial price (S₀).
    pub spot: f64,
    /// Basket weight applied to the terminal price.
    pub weight: f64,
    /// Annualised drift (μ).
    pub drift: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
}

impl Asset {
    /// Creates an asset after checking its numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] when the spot is not
    /// strictly positive, the volatility is negative, or any field is
    /// non-finite.
    pub fn new(
        name: impl Into<String>,
        spot: f64,
        weight: f64,
        drift: f64,
        volatility: f64,
    ) -> Result<Self> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(EngineError::InvalidParameter {
                name: "spot",
                reason: format!("must be positive and finite, got {spot}"),
            });
        }
        if !weight.is_finite() {
            return Err(EngineError::InvalidParameter {
                name: "weight",
                reason: format!("must be finite, got {weight}"),
            });
        }
        if !drift.is_finite() {
            return Err(EngineError::InvalidParameter {
                name: "drift",
                reason: format!("must be finite, got {drift}"),
            });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(EngineError::InvalidParameter {
                name: "volatility",
                reason: format!("must be non-negative and finite, got {volatility}"),
            });
        }
        Ok(Self {
            name: name.into(),
            spot,
            weight,
            drift,
            volatility,
        })
    }
}

/// Non-empty ordered sequence of [`Asset`]s.
///
/// # Examples
///
/// ```rust
/// use pricer_engine::portfolio::{Asset, Portfolio};
///
/// let portfolio = Portfolio::new(vec![
///     Asset::new("AAA", 100.0, 0.5, 0.05, 0.2).unwrap(),
///     Asset::new("BBB", 250.0, 0.5, 0.03, 0.3).unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(portfolio.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio {
    assets: Vec<Asset>,
}

impl Portfolio {
    /// Creates a portfolio from assets already validated individually.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyPortfolio`] when `assets` is empty.
    pub fn new(assets: Vec<Asset>) -> Result<Self> {
        if assets.is_empty() {
            return Err(EngineError::EmptyPortfolio);
        }
        Ok(Self { assets })
    }

    /// Creates a portfolio from parallel parameter columns.
    ///
    /// The four slices must have equal, non-zero length; entry `i` of each
    /// column describes asset `i`. Assets created this way are named
    /// `asset_0`, `asset_1`, …
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ColumnLengthMismatch`] when the slices
    /// disagree in length, [`EngineError::EmptyPortfolio`] when they are
    /// empty, or an [`EngineError::InvalidParameter`] from per-asset
    /// validation.
    pub fn from_columns(
        spots: &[f64],
        weights: &[f64],
        drifts: &[f64],
        volatilities: &[f64],
    ) -> Result<Self> {
        let n = spots.len();
        if weights.len() != n || drifts.len() != n || volatilities.len() != n {
            return Err(EngineError::ColumnLengthMismatch {
                spots: n,
                weights: weights.len(),
                drifts: drifts.len(),
                volatilities: volatilities.len(),
            });
        }
        let assets = (0..n)
            .map(|i| {
                Asset::new(
                    format!("asset_{i}"),
                    spots[i],
                    weights[i],
                    drifts[i],
                    volatilities[i],
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(assets)
    }

    /// Returns the assets in order.
    #[inline]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Returns the number of constituents.
    #[inline]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Always `false`: construction rejects empty portfolios.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_rejects_bad_fields() {
        assert!(Asset::new("x", 0.0, 1.0, 0.0, 0.1).is_err());
        assert!(Asset::new("x", -5.0, 1.0, 0.0, 0.1).is_err());
        assert!(Asset::new("x", 100.0, f64::NAN, 0.0, 0.1).is_err());
        assert!(Asset::new("x", 100.0, 1.0, f64::INFINITY, 0.1).is_err());
        assert!(Asset::new("x", 100.0, 1.0, 0.0, -0.1).is_err());
    }

    #[test]
    fn test_zero_volatility_is_allowed() {
        // Deterministic drift-only assets are a supported boundary case.
        assert!(Asset::new("x", 100.0, 1.0, 0.05, 0.0).is_ok());
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        assert_eq!(Portfolio::new(vec![]), Err(EngineError::EmptyPortfolio));
    }

    #[test]
    fn test_from_columns_builds_in_order() {
        let p = Portfolio::from_columns(
            &[100.0, 200.0],
            &[0.6, 0.4],
            &[0.05, 0.03],
            &[0.2, 0.1],
        )
        .unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.assets()[0].name, "asset_0");
        assert_eq!(p.assets()[1].spot, 200.0);
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        let err = Portfolio::from_columns(&[100.0, 200.0], &[0.6], &[0.05, 0.03], &[0.2, 0.1])
            .unwrap_err();
        assert!(matches!(err, EngineError::ColumnLengthMismatch { .. }));
    }
}
