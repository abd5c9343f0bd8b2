//! Microbenchmarks for thread-level concurrency strategies.
//!
//! Two independent benchmarks live here:
//!
//! - Dense integer matrix multiplication, single-threaded versus split into
//!   contiguous row blocks with one thread per block.
//! - Many threads applying random deltas to one shared balance, with no
//!   synchronization, an atomic, or a mutex.
//!
//! Every trial spawns its own threads and joins them before it returns.
//!
//! ## Usage
//!
//! ```
//! use threadbench::MatrixBench;
//!
//! let mut bench = MatrixBench::new(64);
//! let baseline = bench.run_single_threaded();
//! let parallel = bench.run_parallel(4).unwrap();
//!
//! assert_eq!(bench.output().get(0, 0), 64);
//! println!("{:.3}s vs {:.3}s", baseline.elapsed_secs(), parallel.elapsed_secs());
//! ```
//!
//! The counter benchmark:
//!
//! ```
//! use threadbench::{CounterBench, Strategy};
//!
//! let mut bench = CounterBench::new(1000, 42);
//! let result = bench.run(Strategy::Atomic, 4).unwrap();
//!
//! assert_eq!(result.final_value, result.expected_value);
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod matrix;
pub mod report;
pub mod threaded;
pub mod trial;

pub use config::BenchConfig;
pub use counter::Strategy;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use threaded::parallel_rows::multiply_parallel;
pub use trial::{CounterBench, MatrixBench, TrialConfig, TrialLabel, TrialResult};

use std::io::Write;

/// Runs the full sequence in `config` and writes the report to `out`.
///
/// The matrix benchmark runs to completion before the counter benchmark
/// starts, so no two trials ever overlap.
pub fn run_all<W: Write>(config: &BenchConfig, out: &mut W) -> Result<()> {
    let mut matrix = MatrixBench::new(config.matrix_size);
    let (baseline, parallel) = matrix.run_suite(&config.matrix_threads)?;
    report::write_matrix_report(out, config.matrix_size, &baseline, &parallel)?;
    writeln!(out)?;

    let mut counters = CounterBench::new(config.transactions_per_worker, config.seed);
    let results = counters.run_suite(&config.counter_threads)?;
    report::write_counter_report(out, &results)?;

    Ok(())
}
