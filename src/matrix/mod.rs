//! Square integer matrices and the single-threaded multiply.
//!
//! The naive kernel here is both the baseline trial and the per-block unit
//! of work the threaded dispatcher hands to each worker.

pub mod naive_ijk;

/// An N×N row-major matrix of `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Matrix of the given size with every cell set to `value`.
    pub fn filled(n: usize, value: i64) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    pub fn zeros(n: usize) -> Self {
        Self::filled(n, 0)
    }

    pub fn ones(n: usize) -> Self {
        Self::filled(n, 1)
    }

    /// Builds a matrix from row-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n * n`.
    pub fn from_vec(n: usize, data: Vec<i64>) -> Self {
        assert_eq!(data.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
        Self { n, data }
    }

    /// Dimension N.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.n + col]
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    /// Sets every cell back to zero so the next multiply does not accumulate.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }
}
