use approx::assert_abs_diff_eq;
use matmul_loops::matrix::transpose::transposed;
use matmul_loops::{
    Kernel, Matrix, MatmulError, matmul_blocked, matmul_naive_ijk, matmul_naive_ikj, multiply,
    random_matrix_seeded,
};

const TOLERANCE: f64 = 1e-10;

fn all_kernels() -> Vec<Kernel> {
    vec![
        Kernel::Ijk,
        Kernel::Ikj,
        Kernel::Kij,
        Kernel::IjkTransposed,
        Kernel::blocked(),
        Kernel::Blocked { block_size: 4 },
        Kernel::Blocked { block_size: 3 },
    ]
}

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.dim(), actual.dim(), "{}: dimension mismatch", name);
    for (i, (e, a)) in expected.as_slice().iter().zip(actual.as_slice()).enumerate() {
        assert!(
            (e - a).abs() <= TOLERANCE,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            e,
            a
        );
    }
}

fn m2(rows: [[f64; 2]; 2]) -> Matrix {
    Matrix::from_rows(&rows).unwrap()
}

// ============================================================
// Concrete 2x2 products
// ============================================================

#[test]
fn test_2x2_times_identity() {
    let a = m2([[1.0, 2.0], [3.0, 4.0]]);
    let i = Matrix::identity(2);

    for kernel in all_kernels() {
        let c = multiply(&a, &i, kernel).unwrap();
        assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0, 4.0], "{}", kernel);
    }
}

#[test]
fn test_2x2_multiply() {
    let a = m2([[1.0, 2.0], [3.0, 4.0]]);
    let b = m2([[5.0, 6.0], [7.0, 8.0]]);
    let expected = m2([[19.0, 22.0], [43.0, 50.0]]);

    for kernel in all_kernels() {
        let c = multiply(&a, &b, kernel).unwrap();
        assert_eq!(c, expected, "{}", kernel);
    }
}

// ============================================================
// Algebraic laws
// ============================================================

#[test]
fn test_identity_law() {
    let a = random_matrix_seeded(9, 7);
    let i = Matrix::identity(9);

    for kernel in all_kernels() {
        assert_matrices_equal(&a, &multiply(&a, &i, kernel).unwrap(), "A * I");
        assert_matrices_equal(&a, &multiply(&i, &a, kernel).unwrap(), "I * A");
    }
}

#[test]
fn test_zero_law() {
    let a = random_matrix_seeded(6, 42);
    let z = Matrix::zeros(6);

    for kernel in all_kernels() {
        let c = multiply(&a, &z, kernel).unwrap();
        assert_eq!(c, z, "{}: A * 0 should be 0", kernel);
    }
}

#[test]
fn test_associativity() {
    let a = m2([[1.0, 2.0], [3.0, 4.0]]);
    let b = m2([[5.0, 6.0], [7.0, 8.0]]);
    let c = m2([[9.0, 10.0], [11.0, 12.0]]);

    for kernel in all_kernels() {
        let ab_c = multiply(&multiply(&a, &b, kernel).unwrap(), &c, kernel).unwrap();
        let a_bc = multiply(&a, &multiply(&b, &c, kernel).unwrap(), kernel).unwrap();
        assert_matrices_equal(&ab_c, &a_bc, "(AB)C vs A(BC)");
    }
}

#[test]
fn test_distributivity() {
    let a = m2([[1.0, 2.0], [3.0, 4.0]]);
    let b = m2([[5.0, 6.0], [7.0, 8.0]]);
    let c = m2([[1.0, 1.0], [1.0, 1.0]]);

    for kernel in all_kernels() {
        let left = multiply(&a, &b.add(&c).unwrap(), kernel).unwrap();
        let right = multiply(&a, &b, kernel)
            .unwrap()
            .add(&multiply(&a, &c, kernel).unwrap())
            .unwrap();
        assert_matrices_equal(&left, &right, "A(B+C) vs AB+AC");
    }
}

// ============================================================
// Cross-kernel equivalence
// ============================================================

#[test]
fn test_kernels_agree_on_random_input() {
    let a = random_matrix_seeded(8, 42);
    let b = random_matrix_seeded(8, 43);
    let expected = multiply(&a, &b, Kernel::Ijk).unwrap();

    for kernel in all_kernels() {
        let c = multiply(&a, &b, kernel).unwrap();
        assert_matrices_equal(&expected, &c, &kernel.label());
        assert!(c.approx_eq(&expected, TOLERANCE));
    }
    assert!(!expected.approx_eq(&Matrix::zeros(8), TOLERANCE));
    assert!(!expected.approx_eq(&Matrix::zeros(9), TOLERANCE));
}

#[test]
fn test_kernels_agree_on_odd_sizes() {
    for n in [1, 3, 5, 7, 13, 31, 65] {
        let a = random_matrix_seeded(n, 1);
        let b = random_matrix_seeded(n, 2);
        let expected = multiply(&a, &b, Kernel::Ijk).unwrap();

        for kernel in all_kernels() {
            let c = multiply(&a, &b, kernel).unwrap();
            assert_matrices_equal(&expected, &c, &format!("{} n={}", kernel, n));
        }
    }
}

#[test]
fn test_block_size_invariance() {
    let a = random_matrix_seeded(16, 42);
    let b = random_matrix_seeded(16, 43);
    let reference = multiply(&a, &b, Kernel::blocked()).unwrap();

    for block_size in [1, 4, 5, 8, 16, 17, 64, 1000] {
        let c = multiply(&a, &b, Kernel::Blocked { block_size }).unwrap();
        assert_matrices_equal(&reference, &c, &format!("block_size={}", block_size));
    }
}

// ============================================================
// Slice kernels (C += A * B)
// ============================================================

#[test]
fn test_slice_kernels_accumulate() {
    let n = 12;
    let a: Vec<f64> = (0..n * n).map(|i| (i % 10) as f64).collect();
    let b: Vec<f64> = (0..n * n).map(|i| (i % 7) as f64).collect();

    let mut c_fresh = vec![0.0; n * n];
    matmul_naive_ijk(&a, &b, &mut c_fresh, n);

    let mut c_ikj = vec![5.0; n * n];
    let mut c_blocked = vec![5.0; n * n];
    matmul_naive_ikj(&a, &b, &mut c_ikj, n);
    matmul_blocked(&a, &b, &mut c_blocked, n, 5);

    for idx in 0..n * n {
        assert_abs_diff_eq!(c_ikj[idx], c_fresh[idx] + 5.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(c_blocked[idx], c_fresh[idx] + 5.0, epsilon = TOLERANCE);
    }
}

#[test]
fn test_transpose_twice_is_identity() {
    let a = random_matrix_seeded(7, 3);
    let back = transposed(&transposed(a.as_slice(), 7), 7);
    assert_eq!(back, a.as_slice());
}

// ============================================================
// Random generation
// ============================================================

#[test]
fn test_random_matrix_is_deterministic() {
    let m1 = random_matrix_seeded(5, 42);
    let m2 = random_matrix_seeded(5, 42);
    assert_eq!(m1, m2, "same seed should give the same matrix");

    let m3 = random_matrix_seeded(5, 43);
    assert_ne!(m1, m3, "different seeds should give different matrices");
}

#[test]
fn test_random_matrix_range_and_shape() {
    let m = random_matrix_seeded(20, 99);
    assert_eq!(m.dim(), 20);
    assert_eq!(m.as_slice().len(), 400);
    assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn test_random_matrix_fills_row_major() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Entries come off the stream row by row, so a 3x3 draw is the flat
    // prefix of a 4x4 draw from the same seed.
    let small = matmul_loops::random_matrix(3, StdRng::seed_from_u64(5));
    let big = matmul_loops::random_matrix(4, StdRng::seed_from_u64(5));
    assert_eq!(small.as_slice(), &big.as_slice()[..9]);
}

#[test]
fn test_random_matrix_empty() {
    let m = random_matrix_seeded(0, 42);
    assert!(m.is_empty());
    assert!(m.as_slice().is_empty());
}

// ============================================================
// Error handling
// ============================================================

#[test]
fn test_mismatched_sizes_are_rejected() {
    let a = Matrix::identity(3);
    let b = Matrix::identity(4);

    for kernel in all_kernels() {
        let err = multiply(&a, &b, kernel).unwrap_err();
        assert!(
            matches!(
                err,
                MatmulError::InvalidDimension {
                    expected: 3,
                    got: 4,
                    ..
                }
            ),
            "{}: unexpected error {:?}",
            kernel,
            err
        );
    }
}

#[test]
fn test_ragged_rows_are_rejected() {
    let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert!(matches!(err, MatmulError::InvalidDimension { .. }));

    let err = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap_err();
    assert!(matches!(err, MatmulError::InvalidDimension { .. }));

    assert!(Matrix::from_vec(3, vec![0.0; 8]).is_err());
}

#[test]
fn test_zero_block_size_is_rejected() {
    let a = Matrix::identity(2);
    let err = multiply(&a, &a, Kernel::Blocked { block_size: 0 }).unwrap_err();
    assert_eq!(err, MatmulError::InvalidBlockSize);
}

#[test]
fn test_empty_input_gives_empty_result() {
    let empty = Matrix::zeros(0);
    for kernel in all_kernels() {
        let c = multiply(&empty, &empty, kernel).unwrap();
        assert!(c.is_empty(), "{}", kernel);
    }
}

#[test]
fn test_nan_propagates() {
    let a = m2([[f64::NAN, 0.0], [0.0, 1.0]]);
    let i = Matrix::identity(2);
    let c = multiply(&a, &i, Kernel::Ikj).unwrap();
    assert!(c[(0, 0)].is_nan());
    assert_eq!(c[(1, 1)], 1.0);
}

// ============================================================
// Kernel names
// ============================================================

#[test]
fn test_kernel_parsing() {
    assert_eq!("ijk".parse::<Kernel>().unwrap(), Kernel::Ijk);
    assert_eq!("IKJ".parse::<Kernel>().unwrap(), Kernel::Ikj);
    assert_eq!("k-i-j".parse::<Kernel>().unwrap(), Kernel::Kij);
    assert_eq!("ijk-t".parse::<Kernel>().unwrap(), Kernel::IjkTransposed);
    assert_eq!("blocked".parse::<Kernel>().unwrap(), Kernel::blocked());
    assert_eq!(
        "blocked:32".parse::<Kernel>().unwrap(),
        Kernel::Blocked { block_size: 32 }
    );
    assert_eq!(
        "blocked:0".parse::<Kernel>().unwrap_err(),
        MatmulError::InvalidBlockSize
    );
    assert!(matches!(
        "jki".parse::<Kernel>(),
        Err(MatmulError::UnknownKernel(_))
    ));
    assert!(matches!(
        "blocked:big".parse::<Kernel>(),
        Err(MatmulError::UnknownKernel(_))
    ));
}

#[test]
fn test_kernel_labels() {
    assert_eq!(Kernel::Ijk.to_string(), "i-j-k");
    assert_eq!(Kernel::Ikj.to_string(), "i-k-j");
    assert_eq!(Kernel::Kij.to_string(), "k-i-j");
    assert_eq!(Kernel::blocked().to_string(), "blocked(64)");
}
