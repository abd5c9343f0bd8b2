//! Per-worker transaction streams.

use std::thread;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::shared::SharedCounter;
use crate::error::Result;
use crate::threaded::workers::{join_workers, spawn_worker};

/// Smallest delta a transaction can carry.
pub const MIN_DELTA: i64 = -100;
/// Largest delta a transaction can carry.
pub const MAX_DELTA: i64 = 100;

/// Seed for worker `index`, derived from the trial's base seed.
///
/// Every worker owns its generator, so drawing numbers never contends on
/// anything but the counter under test.
pub fn worker_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add(index as u64)
}

/// The deltas a worker seeded with `seed` will apply, in order.
pub fn deltas(seed: u64, count: usize) -> impl Iterator<Item = i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(move |_| rng.random_range(MIN_DELTA..=MAX_DELTA))
}

/// Applies `count` random transactions to `counter` and returns their sum.
pub fn perform_transactions(counter: &SharedCounter, seed: u64, count: usize) -> i64 {
    let mut sum = 0;
    for delta in deltas(seed, count) {
        counter.apply(delta);
        sum += delta;
    }
    sum
}

/// Runs `threads` concurrent transaction streams against one counter.
///
/// Returns the arithmetic sum of every delta generated, which is what an
/// exact strategy's counter must read once this returns.
pub fn run_concurrent(
    counter: &SharedCounter,
    threads: usize,
    per_worker: usize,
    base_seed: u64,
) -> Result<i64> {
    debug!(strategy = %counter.strategy(), threads, per_worker, "dispatching transaction streams");

    let sums = thread::scope(|s| {
        let handles = (0..threads)
            .map(|index| {
                let seed = worker_seed(base_seed, index);
                spawn_worker(s, "client", index, move || {
                    perform_transactions(counter, seed, per_worker)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        join_workers(handles)
    })?;

    Ok(sums.into_iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::strategy::Strategy;

    #[test]
    fn test_deltas_stay_in_range() {
        assert!(deltas(7, 10_000).all(|d| (MIN_DELTA..=MAX_DELTA).contains(&d)));
    }

    #[test]
    fn test_deltas_are_reproducible_per_seed() {
        let first: Vec<_> = deltas(99, 100).collect();
        let second: Vec<_> = deltas(99, 100).collect();
        let other: Vec<_> = deltas(100, 100).collect();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_worker_seeds_differ() {
        assert_ne!(worker_seed(1, 0), worker_seed(1, 1));
        assert_eq!(worker_seed(u64::MAX, 1), 0);
    }

    #[test]
    fn test_single_stream_returns_its_sum() {
        let counter = SharedCounter::new(Strategy::Atomic);

        let sum = perform_transactions(&counter, 5, 500);

        assert_eq!(sum, deltas(5, 500).sum::<i64>());
        assert_eq!(counter.value(), sum);
    }

    #[test]
    fn test_exact_strategies_match_expected_sum() {
        for strategy in [Strategy::Atomic, Strategy::Mutex] {
            let counter = SharedCounter::new(strategy);

            let expected = run_concurrent(&counter, 8, 2_000, 11).unwrap();

            assert_eq!(counter.value(), expected, "{}", strategy);
        }
    }

    #[test]
    fn test_zero_threads_is_a_no_op() {
        let counter = SharedCounter::new(Strategy::Mutex);

        assert_eq!(run_concurrent(&counter, 0, 100, 1).unwrap(), 0);
        assert_eq!(counter.value(), 0);
    }
}
