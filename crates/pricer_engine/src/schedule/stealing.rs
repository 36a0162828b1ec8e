//! Work-stealing discipline.
//!
//! Task indices are statically partitioned round-robin across per-worker
//! deques (`task i → deque[i % workers]`) before any worker starts; this
//! is load *distribution*, stealing only rebalances residual skew. Each
//! worker pops from the tail of its own deque (LIFO, best locality) and,
//! when that is empty, scans the other deques in increasing index order
//! and steals one task from the head of the first non-empty one (FIFO,
//! minimal contention with the owner).
//!
//! # Termination
//!
//! A worker exits once its own deque is empty and a full scan steals
//! nothing. This check is weak — a concurrent steal can succeed while the
//! scan observes emptiness — but it is sound *here* because distribution
//! is one-shot: nothing is ever re-pushed, so the total remaining work is
//! strictly decreasing and observed emptiness is permanent. A dynamic
//! producer would invalidate this reasoning; the aggregator's
//! exactly-once accounting backstops the invariant either way.
//!
//! # Locking
//!
//! One mutex per deque, held only for the duration of a single pop, push
//! or steal. A worker never holds its own deque's lock while taking a
//! victim's, so no two locks are ever held at once and lock ordering is
//! trivially acyclic.

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

/// A mutex-guarded double-ended task queue owned by one worker.
struct TaskDeque {
    tasks: Mutex<VecDeque<usize>>,
}

impl TaskDeque {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<usize>> {
        match self.tasks.lock() {
            Ok(guard) => guard,
            // Plain indices stay consistent across a sibling panic.
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Appends a task; used only during initial distribution.
    fn push(&self, index: usize) {
        self.lock().push_back(index);
    }

    /// Owner-side removal from the tail (LIFO).
    fn pop(&self) -> Option<usize> {
        self.lock().pop_back()
    }

    /// Thief-side removal from the head (FIFO).
    fn steal(&self) -> Option<usize> {
        self.lock().pop_front()
    }
}

/// Round-robin deque sizes for a given task and worker count.
///
/// With `task i → deque[i % workers]`, worker `w` receives one extra task
/// when `w < n_tasks % n_workers`; 7 tasks over 3 workers split `{3, 2, 2}`.
fn round_robin_counts(n_tasks: usize, n_workers: usize) -> Vec<usize> {
    (0..n_workers)
        .map(|w| n_tasks / n_workers + usize::from(w < n_tasks % n_workers))
        .collect()
}

/// Scans all other deques in increasing index order and steals from the
/// first non-empty one. The scanning worker holds no lock of its own
/// while probing victims.
fn steal_from_any(deques: &[TaskDeque], thief: usize) -> Option<usize> {
    for (victim, deque) in deques.iter().enumerate() {
        if victim == thief {
            continue;
        }
        if let Some(index) = deque.steal() {
            return Some(index);
        }
    }
    None
}

pub(super) fn run(portfolio: &Portfolio, config: &EngineConfig) -> Result<Vec<f64>> {
    let n_simulations = config.n_simulations();
    let n_workers = config.n_workers();

    // One-shot static distribution: task i lands on deque i mod workers.
    let deques: Vec<TaskDeque> = round_robin_counts(n_simulations, n_workers)
        .into_iter()
        .map(TaskDeque::with_capacity)
        .collect();
    for index in 0..n_simulations {
        deques[index % n_workers].push(index);
    }

    let (sender, receiver) = mpsc::channel::<PayoffRecord>();
    let mut acc = PayoffAccumulator::new(n_simulations);

    thread::scope(|scope| -> Result<()> {
        for worker_id in 0..n_workers {
            let sender = sender.clone();
            let deques = &deques;
            scope.spawn(move || {
                let mut rng = WorkerRng::for_worker(config.base_seed(), worker_id);
                let mut owned = 0usize;
                let mut stolen = 0usize;
                loop {
                    let index = match deques[worker_id].pop() {
                        Some(index) => {
                            owned += 1;
                            index
                        }
                        None => match steal_from_any(deques, worker_id) {
                            Some(index) => {
                                stolen += 1;
                                index
                            }
                            // Own deque empty and nothing to steal: done.
                            None => break,
                        },
                    };
                    let payoff = simulate_trial(portfolio, config, &mut rng);
                    if sender.send(PayoffRecord { index, payoff }).is_err() {
                        break;
                    }
                }
                debug!(worker_id, owned, stolen, "stealing worker finished");
            });
        }
        drop(sender);

        for record in receiver {
            acc.record(record)?;
        }
        Ok(())
    })?;

    acc.finish()
}
