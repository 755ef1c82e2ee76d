/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. The innermost loop walks down a column
/// of B with stride `n`, so every step touches a new cache line once the
/// matrix stops fitting in L1.
///
/// It is the baseline every other kernel is timed and checked against.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Rows and columns of every operand
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(c.len(), n * n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = c[i * n + j];
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

/// i-j-k multiplication with B transposed up front.
///
/// Reading `bt[j * n + k]` makes the inner loop sequential in both operands,
/// at the price of one extra n × n buffer and an O(n²) transpose.
pub fn matmul_ijk_transposed(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    let bt = super::transpose::transposed(b, n);

    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let bt_row = &bt[j * n..(j + 1) * n];
            let dot: f64 = a_row.iter().zip(bt_row).map(|(x, y)| x * y).sum();
            c[i * n + j] += dot;
        }
    }
}
