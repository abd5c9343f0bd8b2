//! Timed trials and the state they own.
//!
//! A trial is one configuration run once between two monotonic clock reads.
//! Trials never overlap: each runner method blocks until all of its workers
//! are joined.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

use crate::counter::transactions::run_concurrent;
use crate::counter::{CounterSet, Strategy};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::threaded::parallel_rows::multiply_parallel;

/// Runs `f` once and measures how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// What a trial ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialLabel {
    /// Matrix multiply on the calling thread, no workers spawned.
    SingleThreaded,
    /// Matrix multiply split into row blocks.
    MultiThreaded,
    /// Counter benchmark under the given strategy.
    Counter(Strategy),
}

impl fmt::Display for TrialLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialLabel::SingleThreaded => f.write_str("single-threaded"),
            TrialLabel::MultiThreaded => f.write_str("multithreaded"),
            TrialLabel::Counter(strategy) => write!(f, "{}", strategy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    pub thread_count: usize,
    pub label: TrialLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    pub config: TrialConfig,
    pub elapsed: Duration,
    /// Counter value after the join. `None` for matrix trials.
    pub final_value: Option<i64>,
    /// Sum of every delta the workers generated. `None` for matrix trials.
    pub expected_value: Option<i64>,
}

impl TrialResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Updates the counter lost, or `None` for matrix trials.
    pub fn lost_updates(&self) -> Option<i64> {
        Some(self.expected_value? - self.final_value?)
    }
}

/// Owns A, B and C for the matrix benchmark.
#[derive(Debug)]
pub struct MatrixBench {
    a: Matrix,
    b: Matrix,
    c: Matrix,
}

impl MatrixBench {
    /// All-ones inputs, so every output cell should equal N.
    pub fn new(n: usize) -> Self {
        Self::with_inputs(Matrix::ones(n), Matrix::ones(n))
    }

    /// # Panics
    ///
    /// Panics if A and B differ in size.
    pub fn with_inputs(a: Matrix, b: Matrix) -> Self {
        assert_eq!(a.size(), b.size(), "A and B must be the same size");
        let c = Matrix::zeros(a.size());
        Self { a, b, c }
    }

    pub fn size(&self) -> usize {
        self.a.size()
    }

    /// Output of the most recent trial.
    pub fn output(&self) -> &Matrix {
        &self.c
    }

    pub fn run_single_threaded(&mut self) -> TrialResult {
        self.c.reset();
        debug_assert!(self.c.is_zero());
        let n = self.size();
        let (a, b, c) = (&self.a, &self.b, &mut self.c);

        let ((), elapsed) = timed(|| matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), n));

        self.finish(TrialLabel::SingleThreaded, 1, elapsed)
    }

    pub fn run_parallel(&mut self, threads: usize) -> Result<TrialResult> {
        self.c.reset();
        debug_assert!(self.c.is_zero());
        let (a, b, c) = (&self.a, &self.b, &mut self.c);

        let (outcome, elapsed) = timed(|| multiply_parallel(a, b, c, threads));
        outcome?;

        Ok(self.finish(TrialLabel::MultiThreaded, threads, elapsed))
    }

    /// Baseline first, then one parallel trial per thread count.
    ///
    /// The baseline runs before any parallel trial touches C.
    pub fn run_suite(&mut self, thread_counts: &[usize]) -> Result<(TrialResult, Vec<TrialResult>)> {
        let baseline = self.run_single_threaded();
        let parallel = thread_counts
            .iter()
            .map(|&threads| self.run_parallel(threads))
            .collect::<Result<Vec<_>>>()?;
        Ok((baseline, parallel))
    }

    fn finish(&self, label: TrialLabel, thread_count: usize, elapsed: Duration) -> TrialResult {
        info!(%label, threads = thread_count, n = self.size(), secs = elapsed.as_secs_f64(), "matrix trial done");
        TrialResult {
            config: TrialConfig { thread_count, label },
            elapsed,
            final_value: None,
            expected_value: None,
        }
    }
}

/// Owns the per-strategy counters for the contention benchmark.
#[derive(Debug)]
pub struct CounterBench {
    counters: CounterSet,
    transactions_per_worker: usize,
    seed: u64,
}

impl CounterBench {
    pub fn new(transactions_per_worker: usize, seed: u64) -> Self {
        Self {
            counters: CounterSet::new(),
            transactions_per_worker,
            seed,
        }
    }

    pub fn counters(&self) -> &CounterSet {
        &self.counters
    }

    /// One trial: reset the strategy's counter, run `threads` streams, join.
    pub fn run(&mut self, strategy: Strategy, threads: usize) -> Result<TrialResult> {
        let (per_worker, seed) = (self.transactions_per_worker, self.seed);
        let counter = self.counters.get_mut(strategy);
        counter.reset();
        let counter = &*counter;
        debug_assert_eq!(counter.value(), 0);

        let (expected, elapsed) = timed(|| run_concurrent(counter, threads, per_worker, seed));
        let expected = expected?;
        let final_value = counter.value();
        debug_assert!(!strategy.is_exact() || final_value == expected);

        info!(%strategy, threads, secs = elapsed.as_secs_f64(), final_value, expected, "counter trial done");

        Ok(TrialResult {
            config: TrialConfig {
                thread_count: threads,
                label: TrialLabel::Counter(strategy),
            },
            elapsed,
            final_value: Some(final_value),
            expected_value: Some(expected),
        })
    }

    /// Every strategy once per thread count, thread count outermost.
    pub fn run_suite(&mut self, thread_counts: &[usize]) -> Result<Vec<TrialResult>> {
        let mut results = Vec::with_capacity(thread_counts.len() * Strategy::ALL.len());
        for &threads in thread_counts {
            for strategy in Strategy::ALL {
                results.push(self.run(strategy, threads)?);
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_output() {
        let (value, elapsed) = timed(|| 6 * 7);

        assert_eq!(value, 42);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_matrix_trials_reset_output() {
        let mut bench = MatrixBench::new(8);

        bench.run_single_threaded();
        bench.run_parallel(4).unwrap();
        bench.run_parallel(2).unwrap();

        // Without a reset C would hold 3 * 8 in every cell.
        assert!(bench.output().as_slice().iter().all(|&v| v == 8));
    }

    #[test]
    fn test_matrix_suite_order() {
        let mut bench = MatrixBench::new(16);

        let (baseline, parallel) = bench.run_suite(&[2, 4, 8]).unwrap();

        assert_eq!(baseline.config.label, TrialLabel::SingleThreaded);
        assert_eq!(baseline.config.thread_count, 1);
        let threads: Vec<_> = parallel.iter().map(|r| r.config.thread_count).collect();
        assert_eq!(threads, [2, 4, 8]);
        assert!(parallel.iter().all(|r| r.final_value.is_none()));
    }

    #[test]
    fn test_counter_run_is_repeatable_for_exact_strategies() {
        let mut bench = CounterBench::new(1000, 3);

        for strategy in [Strategy::Atomic, Strategy::Mutex] {
            let first = bench.run(strategy, 4).unwrap();
            let second = bench.run(strategy, 4).unwrap();

            assert_eq!(first.final_value, first.expected_value);
            assert_eq!(first.final_value, second.final_value);
            assert_eq!(first.lost_updates(), Some(0));
        }
    }

    #[test]
    fn test_counter_suite_order() {
        let mut bench = CounterBench::new(10, 0);

        let results = bench.run_suite(&[2, 4]).unwrap();

        let order: Vec<_> = results
            .iter()
            .map(|r| (r.config.thread_count, r.config.label))
            .collect();
        assert_eq!(
            order,
            [
                (2, TrialLabel::Counter(Strategy::Unsynchronized)),
                (2, TrialLabel::Counter(Strategy::Atomic)),
                (2, TrialLabel::Counter(Strategy::Mutex)),
                (4, TrialLabel::Counter(Strategy::Unsynchronized)),
                (4, TrialLabel::Counter(Strategy::Atomic)),
                (4, TrialLabel::Counter(Strategy::Mutex)),
            ]
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!(TrialLabel::SingleThreaded.to_string(), "single-threaded");
        assert_eq!(TrialLabel::Counter(Strategy::Mutex).to_string(), "mutex");
    }
}
