//! Geometric Brownian Motion path generation.
//!
//! Uses the exact-step log-space update, which is unconditionally stable
//! and keeps every simulated price strictly positive:
//!
//! ```text
//! S(t+dt) = S(t) × exp((μ - 0.5σ²)dt + σ√dt × Z)
//! ```

use crate::rng::WorkerRng;

/// Generates one price trajectory of `n_steps + 1` points.
///
/// Element 0 is `spot`; callers typically consume only the final element.
/// Consumes exactly `n_steps` standard-normal draws from `rng` and has no
/// other side effects.
///
/// With `n_steps == 0` the path is the single point `[spot]` and the
/// stream is untouched.
///
/// # Arguments
///
/// * `spot` - Initial price (S₀)
/// * `drift` - Annualised drift (μ)
/// * `volatility` - Annualised volatility (σ)
/// * `maturity` - Horizon in years (T)
/// * `n_steps` - Number of time steps
/// * `rng` - The executing worker's private stream
pub fn generate_path(
    spot: f64,
    drift: f64,
    volatility: f64,
    maturity: f64,
    n_steps: usize,
    rng: &mut WorkerRng,
) -> Vec<f64> {
    let mut path = Vec::with_capacity(n_steps + 1);
    path.push(spot);
    if n_steps == 0 {
        return path;
    }

    let dt = maturity / n_steps as f64;
    let drift_dt = (drift - 0.5 * volatility * volatility) * dt;
    let vol_sqrt_dt = volatility * dt.sqrt();

    let mut current = spot;
    for _ in 0..n_steps {
        let z = rng.gen_normal();
        current *= (drift_dt + vol_sqrt_dt * z).exp();
        path.push(current);
    }
    path
}
