/// The fixed trial sequence the binary runs.
///
/// There are no command-line flags; `Default` is the configuration. Tests
/// and benches build smaller ones directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dimension N of the square matrices.
    pub matrix_size: usize,
    /// Thread counts for the parallel multiply trials. The single-threaded
    /// baseline always runs first and is not listed here.
    pub matrix_threads: Vec<usize>,
    /// Thread counts for the counter trials. Every strategy runs once per entry.
    pub counter_threads: Vec<usize>,
    pub transactions_per_worker: usize,
    /// Base seed for per-worker generators.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            matrix_size: 1000,
            matrix_threads: vec![2, 4, 8],
            counter_threads: vec![2, 4, 8],
            transactions_per_worker: 1000,
            seed: 0,
        }
    }
}

impl BenchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
