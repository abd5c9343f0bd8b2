use std::ops::Range;

use crate::error::{Error, Result};

/// Splits `rows` into `threads` contiguous blocks.
///
/// Every block gets `rows / threads` rows and the last block also takes the
/// `rows % threads` leftovers, so the blocks always cover `0..rows` exactly
/// once. A thread count of zero, or one larger than the row count, would
/// leave a block empty and is rejected.
///
/// # Example
///
/// ```
/// use threadbench::threaded::partition::row_blocks;
///
/// let blocks = row_blocks(10, 4).unwrap();
/// assert_eq!(blocks, vec![0..2, 2..4, 4..6, 6..10]);
/// ```
pub fn row_blocks(rows: usize, threads: usize) -> Result<Vec<Range<usize>>> {
    if threads == 0 || threads > rows {
        return Err(Error::InvalidThreadCount { threads, rows });
    }

    let block_size = rows / threads;

    Ok((0..threads)
        .map(|t| {
            let start = t * block_size;
            let end = if t + 1 == threads {
                rows
            } else {
                start + block_size
            };
            start..end
        })
        .collect())
}
