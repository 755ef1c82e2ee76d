//! Seeded random input generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::dense::Matrix;

/// Fill an n×n matrix with uniform draws from [0, 1).
///
/// The generator is taken by value so the caller decides how it is seeded;
/// nothing here touches a thread-local or global RNG. Entries are drawn in
/// row-major order, so a given generator state always produces the same
/// matrix.
pub fn random_matrix<R: Rng>(n: usize, mut rng: R) -> Matrix {
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect();
    Matrix::from_parts(n, data)
}

/// [`random_matrix`] with a freshly seeded [`StdRng`].
///
/// Same `n` and `seed` give a bit-identical matrix for a given `rand`
/// release; other generator algorithms will give other values.
///
/// ```
/// use matmul_loops::random_matrix_seeded;
///
/// let a = random_matrix_seeded(4, 42);
/// assert_eq!(a, random_matrix_seeded(4, 42));
/// assert!(a.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub fn random_matrix_seeded(n: usize, seed: u64) -> Matrix {
    random_matrix(n, StdRng::seed_from_u64(seed))
}
