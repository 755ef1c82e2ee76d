//! Cache-blocked i-j-k.

/// Tile edge used when no block size is given.
///
/// Three 64 × 64 `f64` tiles are 96 KiB, which sits in L2 on anything
/// recent and keeps the B tile's rows resident while a C tile is built.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Cache-blocked matrix multiplication.
///
/// Walks the (ii, jj, kk) tile grid in steps of `block_size` and runs plain
/// i-j-k inside each tile. Tiles on the right and bottom edges are clipped
/// to `n`, so any `block_size >= 1` works for any `n`, including sizes that
/// don't divide evenly and block sizes larger than the matrix.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Rows and columns of every operand
/// * `block_size` - Tile edge, must be at least 1
///
/// # Panics
///
/// Panics if `block_size` is 0. [`crate::multiply`] reports that as an
/// error instead.
pub fn matmul_blocked(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block_size: usize) {
    assert!(block_size > 0, "block_size must be at least 1");
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(c.len(), n * n);

    for ii in (0..n).step_by(block_size) {
        let i_end = (ii + block_size).min(n);

        for jj in (0..n).step_by(block_size) {
            let j_end = (jj + block_size).min(n);

            for kk in (0..n).step_by(block_size) {
                let k_end = (kk + block_size).min(n);

                for i in ii..i_end {
                    for j in jj..j_end {
                        let mut sum = c[i * n + j];
                        for k in kk..k_end {
                            sum += a[i * n + k] * b[k * n + j];
                        }
                        c[i * n + j] = sum;
                    }
                }
            }
        }
    }
}
