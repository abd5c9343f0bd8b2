use std::ops::Range;

/// Naive matrix multiplication using i-j-k loop order.
///
/// The textbook triple loop over N×N row-major matrices. Each output cell is
/// accumulated into (C += A * B), so callers reset C between trials.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
pub fn matmul_naive_ijk(a: &[i64], b: &[i64], c: &mut [i64], n: usize) {
    multiply_rows(a, b, c, 0..n, n);
}

/// Computes the output rows `rows` of C = A * B.
///
/// `c_rows` holds only those rows: row `rows.start` of C is at offset 0.
/// This is the unit of work a single block worker runs, and it never
/// touches any other row of C.
pub fn multiply_rows(a: &[i64], b: &[i64], c_rows: &mut [i64], rows: Range<usize>, n: usize) {
    debug_assert_eq!(c_rows.len(), rows.len() * n);

    for (local, i) in rows.enumerate() {
        let out = &mut c_rows[local * n..(local + 1) * n];
        for (j, cell) in out.iter_mut().enumerate() {
            for p in 0..n {
                *cell += a[i * n + p] * b[p * n + j];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2x2_known_product() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut c = [0; 4];

        matmul_naive_ijk(&a, &b, &mut c, 2);

        assert_eq!(c, [19, 22, 43, 50]);
    }

    #[test]
    fn test_multiply_rows_writes_only_its_slice() {
        let n = 3;
        let a: Vec<i64> = (0..9).collect();
        let b: Vec<i64> = (0..9).rev().collect();

        let mut full = vec![0; 9];
        matmul_naive_ijk(&a, &b, &mut full, n);

        let mut middle = vec![0; 3];
        multiply_rows(&a, &b, &mut middle, 1..2, n);

        assert_eq!(middle, full[3..6]);
    }
}
