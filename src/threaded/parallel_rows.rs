//! Thread-per-block matrix multiplication.

use std::thread;

use tracing::debug;

use super::partition::row_blocks;
use super::workers::{join_workers, spawn_worker};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::multiply_rows;

/// Multi-threaded C += A * B over `num_threads` row blocks.
///
/// Splits C into contiguous row blocks (see [`row_blocks`]) and spawns one
/// worker per block. Each worker gets an exclusive `&mut` slice over its own
/// rows of C, so the output needs no locking. Returns only after every worker
/// has been joined.
///
/// # Errors
///
/// Rejects thread counts that [`row_blocks`] cannot satisfy, and propagates
/// thread creation failures and worker panics.
///
/// # Panics
///
/// Panics if the three matrices differ in size.
pub fn multiply_parallel(a: &Matrix, b: &Matrix, c: &mut Matrix, num_threads: usize) -> Result<()> {
    let n = a.size();
    assert_eq!(b.size(), n, "B: expected {}x{}", n, n);
    assert_eq!(c.size(), n, "C: expected {}x{}", n, n);

    let blocks = row_blocks(n, num_threads)?;
    debug!(n, threads = num_threads, block_rows = blocks[0].len(), "dispatching matmul blocks");

    let a = a.as_slice();
    let b = b.as_slice();
    let mut rest = c.as_mut_slice();

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(blocks.len());

        for (index, rows) in blocks.into_iter().enumerate() {
            let (block, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * n);
            rest = tail;

            handles.push(spawn_worker(s, "matmul", index, move || {
                multiply_rows(a, b, block, rows, n)
            })?);
        }

        join_workers(handles).map(|_| ())
    })
}
