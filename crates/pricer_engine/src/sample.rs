//! Payoff subsampling for downstream reporting.
//!
//! The sampler draws from its own explicitly seeded stream rather than
//! any worker's simulation stream, so exporting a sample never perturbs
//! the priced result, and a fixed sampler seed makes the exported sample
//! itself reproducible.

use tracing::debug;

use crate::rng::WorkerRng;

/// Draws a reporting subsample from the full payoff vector.
///
/// When the vector already fits within `sample_size` it is returned as
/// is. Otherwise `sample_size` elements are drawn uniformly **with
/// replacement**. The result never exceeds
/// `min(sample_size, payoffs.len())` elements.
///
/// # Examples
///
/// ```rust
/// use pricer_engine::sample::sample_payoffs;
///
/// let payoffs = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(sample_payoffs(&payoffs, 10, 42), payoffs);
/// assert_eq!(sample_payoffs(&payoffs, 2, 42).len(), 2);
/// ```
pub fn sample_payoffs(payoffs: &[f64], sample_size: usize, seed: u64) -> Vec<f64> {
    if payoffs.len() <= sample_size {
        return payoffs.to_vec();
    }

    debug!(
        total = payoffs.len(),
        sample_size, seed, "subsampling payoffs with replacement"
    );
    let mut rng = WorkerRng::from_seed(seed);
    (0..sample_size)
        .map(|_| payoffs[rng.gen_index(payoffs.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_returned_whole() {
        let payoffs = vec![5.0, 6.0, 7.0];
        assert_eq!(sample_payoffs(&payoffs, 3, 1), payoffs);
        assert_eq!(sample_payoffs(&payoffs, 100, 1), payoffs);
    }

    #[test]
    fn test_sample_size_bound() {
        let payoffs: Vec<f64> = (0..500).map(|i| i as f64).collect();
        for requested in [0, 1, 100, 499, 500, 1000] {
            let sample = sample_payoffs(&payoffs, requested, 42);
            assert!(sample.len() <= requested.min(payoffs.len()));
        }
    }

    #[test]
    fn test_sample_elements_come_from_input() {
        let payoffs: Vec<f64> = (0..100).map(|i| i as f64 * 3.0).collect();
        let sample = sample_payoffs(&payoffs, 50, 9);
        for value in sample {
            assert!(payoffs.contains(&value));
        }
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let payoffs: Vec<f64> = (0..100).map(|i| (i as f64).sin()).collect();
        let a = sample_payoffs(&payoffs, 20, 77);
        let b = sample_payoffs(&payoffs, 20, 77);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let payoffs: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let a = sample_payoffs(&payoffs, 100, 1);
        let b = sample_payoffs(&payoffs, 100, 2);
        assert_ne!(a, b);
    }
}
