/// Matrix multiplication using k-i-j loop order.
///
/// Like i-k-j, the inner loop streams rows of B and C. The middle loop now
/// walks down column k of A, and every pass over k revisits all of C, so it
/// usually lands between i-j-k and i-k-j.
pub fn matmul_naive_kij(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(c.len(), n * n);

    for k in 0..n {
        let b_row = &b[k * n..(k + 1) * n];
        for i in 0..n {
            let aik = a[i * n + k];
            let c_row = &mut c[i * n..(i + 1) * n];
            for (cij, bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
}
