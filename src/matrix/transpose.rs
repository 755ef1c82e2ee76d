/// Transpose a square matrix: dst = src^T
///
/// After the transpose, column j of `src` is row j of `dst`.
///
/// # Arguments
///
/// * `src` - Source matrix (n × n), row-major
/// * `dst` - Destination matrix (n × n), row-major
/// * `n` - Rows and columns of both
///
/// # Example
///
/// ```
/// use matmul_loops::matrix::transpose::transpose;
///
/// let src = vec![1.0, 2.0,
///                3.0, 4.0];
/// let mut dst = vec![0.0; 4];
///
/// transpose(&src, &mut dst, 2);
///
/// assert_eq!(dst, vec![1.0, 3.0,
///                      2.0, 4.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], n: usize) {
    for i in 0..n {
        for j in 0..n {
            dst[j * n + i] = src[i * n + j];
        }
    }
}

/// Allocating version of [`transpose`].
pub fn transposed(src: &[f64], n: usize) -> Vec<f64> {
    let mut dst = vec![0.0; n * n];
    transpose(src, &mut dst, n);
    dst
}
