//! Fixed worker-pool discipline.
//!
//! All task indices are pre-loaded into one shared FIFO queue. Workers
//! pull from it until it is empty, each owning a private stream seeded
//! `base_seed + worker_id`, and push completed [`PayoffRecord`]s into an
//! mpsc channel. The main thread keeps no sender of its own, so the
//! channel closes exactly when the last worker finishes — the aggregator
//! drain cannot miss late results.
//!
//! Completion order across workers is unconstrained; the accumulator
//! restores index order.

use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;

use tracing::debug;

use crate::aggregate::{PayoffAccumulator, PayoffRecord};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::portfolio::Portfolio;
use crate::rng::WorkerRng;

use super::simulate_trial;

/// Pops the next task, recovering the queue from a sibling panic.
///
/// The queue holds plain indices, so a poisoned lock leaves it fully
/// usable; the missing results from the panicked worker surface later as
/// an aggregation error.
fn next_task(queue: &Mutex<VecDeque<usize>>) -> Option<usize> {
    let mut guard = match queue.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.pop_front()
}

pub(super) fn run(portfolio: &Portfolio, config: &EngineConfig) -> Result<Vec<f64>> {
    let n_simulations = config.n_simulations();
    let n_workers = config.n_workers();

    // The queue is fully loaded before any worker starts; draining it to
    // empty is the pool's only termination condition.
    let queue: Mutex<VecDeque<usize>> = Mutex::new((0..n_simulations).collect());
    let (sender, receiver) = mpsc::channel::<PayoffRecord>();
    let mut acc = PayoffAccumulator::new(n_simulations);

    thread::scope(|scope| -> Result<()> {
        for worker_id in 0..n_workers {
            let sender = sender.clone();
            let queue = &queue;
            scope.spawn(move || {
                let mut rng = WorkerRng::for_worker(config.base_seed(), worker_id);
                let mut processed = 0usize;
                while let Some(index) = next_task(queue) {
                    let payoff = simulate_trial(portfolio, config, &mut rng);
                    processed += 1;
                    if sender.send(PayoffRecord { index, payoff }).is_err() {
                        // Receiver gone: the run is already aborting.
                        break;
                    }
                }
                debug!(worker_id, processed, "pool worker finished");
            });
        }
        // Drop the template sender so the drain below terminates once
        // every worker has hung up.
        drop(sender);

        for record in receiver {
            acc.record(record)?;
        }
        Ok(())
    })?;

    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Asset;

    fn portfolio() -> Portfolio {
        Portfolio::new(vec![
            Asset::new("AAA", 100.0, 0.6, 0.05, 0.2).unwrap(),
            Asset::new("BBB", 300.0, 0.4, 0.01, 0.4).unwrap(),
        ])
        .unwrap()
    }

    fn config(n_simulations: usize, n_workers: usize) -> EngineConfig {
        EngineConfig::builder()
            .strike(0.0)
            .n_simulations(n_simulations)
            .n_steps(10)
            .n_workers(n_workers)
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_tasks_completed_exactly_once() {
        let payoffs = run(&portfolio(), &config(500, 4)).unwrap();
        assert_eq!(payoffs.len(), 500);
        // Strike 0 call on positive prices: an unwritten slot would be 0.
        assert!(payoffs.iter().all(|&p| p > 0.0));
    }

    #[test]
    fn test_reproducible_for_fixed_seed_and_worker_count() {
        // Bitwise reproducibility across repeated runs is only guaranteed
        // when the task-to-worker assignment is stable. With more than one
        // worker the FIFO drain races, so assignment (and hence which
        // stream's k-th draw lands on which index) varies run to run; a
        // single worker drains deterministically.
        let config = config(300, 1);
        let a = run(&portfolio(), &config).unwrap();
        let b = run(&portfolio(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_multiworker_runs_complete_whatever_the_assignment() {
        // Repeated multi-worker runs may assign tasks differently each
        // time; every run must still produce a dense, exactly-once payoff
        // vector of the right length.
        let config = config(300, 3);
        for _ in 0..5 {
            let payoffs = run(&portfolio(), &config).unwrap();
            assert_eq!(payoffs.len(), 300);
            assert!(payoffs.iter().all(|&p| p > 0.0));
        }
    }

    #[test]
    fn test_single_worker_pool_matches_sequential() {
        // One pool worker drains the FIFO queue in index order with
        // stream `base_seed + 0` — the same trajectory as Sequential.
        let config = config(100, 1);
        let pooled = run(&portfolio(), &config).unwrap();
        let sequential = super::super::sequential::run(&portfolio(), &config).unwrap();
        assert_eq!(pooled, sequential);
    }

    #[test]
    fn test_more_workers_than_tasks() {
        let payoffs = run(&portfolio(), &config(3, 8)).unwrap();
        assert_eq!(payoffs.len(), 3);
    }
}
