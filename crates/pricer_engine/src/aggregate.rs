//! Order-stable result aggregation.
//!
//! Workers complete tasks in an arbitrary interleaving; the accumulator
//! restores index order by writing each payoff into a pre-sized dense
//! vector at its task index. Every index in `0..expected` must be written
//! exactly once — duplicates, out-of-range indices and missing results
//! are protocol violations that abort the run.

use crate::error::{EngineError, Result};

/// One completed task: the original task index and its payoff.
///
/// Flows from an execution unit to the accumulator exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayoffRecord {
    /// Task index in `0..simulations`.
    pub index: usize,
    /// Non-negative payoff for the trial.
    pub payoff: f64,
}

/// Collects unordered [`PayoffRecord`]s into a dense ordered vector.
///
/// # Examples
///
/// ```rust
/// use pricer_engine::aggregate::{PayoffAccumulator, PayoffRecord};
///
/// let mut acc = PayoffAccumulator::new(3);
/// for record in [
///     PayoffRecord { index: 2, payoff: 30.0 },
///     PayoffRecord { index: 0, payoff: 10.0 },
///     PayoffRecord { index: 1, payoff: 20.0 },
/// ] {
///     acc.record(record).unwrap();
/// }
/// assert_eq!(acc.finish().unwrap(), vec![10.0, 20.0, 30.0]);
/// ```
#[derive(Debug)]
pub struct PayoffAccumulator {
    payoffs: Vec<f64>,
    written: Vec<bool>,
    received: usize,
}

impl PayoffAccumulator {
    /// Creates an accumulator expecting exactly `expected` results.
    pub fn new(expected: usize) -> Self {
        Self {
            payoffs: vec![0.0; expected],
            written: vec![false; expected],
            received: 0,
        }
    }

    /// Returns the number of results expected in total.
    #[inline]
    pub fn expected(&self) -> usize {
        self.payoffs.len()
    }

    /// Returns the number of results received so far.
    #[inline]
    pub fn received(&self) -> usize {
        self.received
    }

    /// Records one completed task.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AggregationIndexOutOfRange`] or
    /// [`EngineError::AggregationDuplicateIndex`] on protocol violations.
    pub fn record(&mut self, record: PayoffRecord) -> Result<()> {
        let expected = self.payoffs.len();
        if record.index >= expected {
            return Err(EngineError::AggregationIndexOutOfRange {
                index: record.index,
                expected,
            });
        }
        if self.written[record.index] {
            return Err(EngineError::AggregationDuplicateIndex(record.index));
        }
        self.payoffs[record.index] = record.payoff;
        self.written[record.index] = true;
        self.received += 1;
        Ok(())
    }

    /// Consumes the accumulator, returning the dense payoff vector.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AggregationIncomplete`] when any index was
    /// never written.
    pub fn finish(self) -> Result<Vec<f64>> {
        if self.received != self.payoffs.len() {
            return Err(EngineError::AggregationIncomplete {
                received: self.received,
                expected: self.payoffs.len(),
            });
        }
        Ok(self.payoffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_out_of_order_delivery_restores_index_order() {
        let mut acc = PayoffAccumulator::new(4);
        for index in [3, 1, 0, 2] {
            acc.record(PayoffRecord {
                index,
                payoff: index as f64 * 10.0,
            })
            .unwrap();
        }
        assert_eq!(acc.finish().unwrap(), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_duplicate_index_is_fatal() {
        let mut acc = PayoffAccumulator::new(2);
        acc.record(PayoffRecord { index: 1, payoff: 5.0 }).unwrap();
        let err = acc
            .record(PayoffRecord { index: 1, payoff: 6.0 })
            .unwrap_err();
        assert_eq!(err, EngineError::AggregationDuplicateIndex(1));
    }

    #[test]
    fn test_out_of_range_index_is_fatal() {
        let mut acc = PayoffAccumulator::new(2);
        let err = acc
            .record(PayoffRecord { index: 2, payoff: 1.0 })
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::AggregationIndexOutOfRange { index: 2, expected: 2 }
        );
    }

    #[test]
    fn test_missing_results_are_fatal() {
        let mut acc = PayoffAccumulator::new(3);
        acc.record(PayoffRecord { index: 0, payoff: 1.0 }).unwrap();
        let err = acc.finish().unwrap_err();
        assert_eq!(
            err,
            EngineError::AggregationIncomplete { received: 1, expected: 3 }
        );
    }

    #[test]
    fn test_genuine_zero_payoffs_are_not_holes() {
        let mut acc = PayoffAccumulator::new(2);
        acc.record(PayoffRecord { index: 0, payoff: 0.0 }).unwrap();
        acc.record(PayoffRecord { index: 1, payoff: 0.0 }).unwrap();
        assert_eq!(acc.finish().unwrap(), vec![0.0, 0.0]);
    }

    proptest! {
        #[test]
        fn prop_any_permutation_aggregates_completely(n in 1usize..64, seed in any::<u64>()) {
            // Deliver indices in a pseudo-random order derived from `seed`.
            let mut order: Vec<usize> = (0..n).collect();
            let mut state = seed;
            for i in (1..n).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                order.swap(i, j);
            }

            let mut acc = PayoffAccumulator::new(n);
            for index in order {
                acc.record(PayoffRecord { index, payoff: index as f64 }).unwrap();
            }
            let payoffs = acc.finish().unwrap();
            prop_assert_eq!(payoffs.len(), n);
            for (i, &p) in payoffs.iter().enumerate() {
                prop_assert_eq!(p, i as f64);
            }
        }
    }
}
