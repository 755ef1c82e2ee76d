//! Square matrix multiplication under different loop orders, and a harness
//! to time them.
//!
//! Every kernel computes the same product. What changes is the order the
//! three loops visit memory in, and that alone moves runtime by several
//! times once the matrices outgrow L1. This crate exists to measure that.
//!
//! ## Usage
//!
//! ```
//! use matmul_loops::{Kernel, Matrix, multiply};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
//!
//! let c = multiply(&a, &b, Kernel::Ikj).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! To time kernels against each other:
//!
//! ```
//! use matmul_loops::harness::{BenchConfig, run};
//!
//! let config = BenchConfig { sizes: vec![16], runs: 2, ..BenchConfig::default() };
//! let reports = run(&config).unwrap();
//! assert_eq!(reports[0].kernels.len(), config.kernels.len());
//! ```
//!
//! ## What's inside
//!
//! - i-j-k, i-k-j and k-i-j triple loops
//! - i-j-k over a transposed B
//! - Cache blocking with a configurable tile size (default 64)
//! - Mean / population stddev timing harness with speedups and GFLOPS

use std::fmt;
use std::str::FromStr;

pub mod blocked;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod report;
pub mod stats;

pub use blocked::{DEFAULT_BLOCK_SIZE, matmul_blocked};
pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::{matmul_ijk_transposed, matmul_naive_ijk};
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::naive_kij::matmul_naive_kij;
pub use matrix::random::{random_matrix, random_matrix_seeded};

/// One multiplication strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// i-j-k, the baseline.
    Ijk,
    /// i-k-j, row-streaming inner loop.
    Ikj,
    /// k-i-j.
    Kij,
    /// i-j-k against a transposed copy of B.
    IjkTransposed,
    /// Tiled i-j-k.
    Blocked { block_size: usize },
}

impl Kernel {
    /// The kernels the benchmark runs when none are named.
    pub const DEFAULT_SET: [Kernel; 4] = [
        Kernel::Ijk,
        Kernel::Ikj,
        Kernel::Kij,
        Kernel::blocked(),
    ];

    /// Blocked kernel with [`DEFAULT_BLOCK_SIZE`].
    pub const fn blocked() -> Self {
        Kernel::Blocked {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Short name used in reports.
    pub fn label(&self) -> String {
        match self {
            Kernel::Ijk => "i-j-k".to_string(),
            Kernel::Ikj => "i-k-j".to_string(),
            Kernel::Kij => "k-i-j".to_string(),
            Kernel::IjkTransposed => "i-j-k (B^T)".to_string(),
            Kernel::Blocked { block_size } => format!("blocked({})", block_size),
        }
    }

    /// Run on raw row-major buffers: C += A * B.
    ///
    /// No validation; see [`multiply`].
    pub fn apply(&self, a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
        match *self {
            Kernel::Ijk => matmul_naive_ijk(a, b, c, n),
            Kernel::Ikj => matmul_naive_ikj(a, b, c, n),
            Kernel::Kij => matmul_naive_kij(a, b, c, n),
            Kernel::IjkTransposed => matmul_ijk_transposed(a, b, c, n),
            Kernel::Blocked { block_size } => matmul_blocked(a, b, c, n, block_size),
        }
    }

    /// Parse a kernel name, giving a bare `blocked` the tile size
    /// `block_size`.
    ///
    /// Accepts `ijk`, `ikj`, `kij`, `ijk-t`, `blocked` and `blocked:<size>`,
    /// case-insensitively. Dashes between loop letters are allowed (`i-k-j`).
    ///
    /// ```
    /// use matmul_loops::Kernel;
    ///
    /// assert_eq!(Kernel::parse_with_block_size("blocked", 32).unwrap(),
    ///            Kernel::Blocked { block_size: 32 });
    /// assert_eq!(Kernel::parse_with_block_size("blocked:8", 32).unwrap(),
    ///            Kernel::Blocked { block_size: 8 });
    /// assert_eq!("i-k-j".parse::<Kernel>().unwrap(), Kernel::Ikj);
    /// ```
    pub fn parse_with_block_size(s: &str, block_size: usize) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let block_size = match name.strip_prefix("blocked:") {
            Some(size) => size
                .parse::<usize>()
                .map_err(|_| MatmulError::UnknownKernel(s.to_string()))?,
            None => match name.as_str() {
                "ijk" | "i-j-k" => return Ok(Kernel::Ijk),
                "ikj" | "i-k-j" => return Ok(Kernel::Ikj),
                "kij" | "k-i-j" => return Ok(Kernel::Kij),
                "ijk-t" | "ijkt" | "transposed" => return Ok(Kernel::IjkTransposed),
                "blocked" | "tiled" => block_size,
                _ => return Err(MatmulError::UnknownKernel(s.to_string())),
            },
        };
        if block_size == 0 {
            return Err(MatmulError::InvalidBlockSize);
        }
        Ok(Kernel::Blocked { block_size })
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Kernel {
    type Err = MatmulError;

    fn from_str(s: &str) -> Result<Self> {
        Kernel::parse_with_block_size(s, DEFAULT_BLOCK_SIZE)
    }
}

/// Multiply two square matrices with the given kernel: C = A * B.
///
/// Both operands must have the same dimension, otherwise
/// [`MatmulError::InvalidDimension`] is returned before anything is
/// computed. A blocked kernel with a block size of 0 gives
/// [`MatmulError::InvalidBlockSize`]. Two empty matrices multiply to an
/// empty matrix.
pub fn multiply(a: &Matrix, b: &Matrix, kernel: Kernel) -> Result<Matrix> {
    let n = a.dim();
    if b.dim() != n {
        return Err(MatmulError::InvalidDimension {
            what: "right operand size",
            expected: n,
            got: b.dim(),
        });
    }
    if let Kernel::Blocked { block_size: 0 } = kernel {
        return Err(MatmulError::InvalidBlockSize);
    }

    let mut c = Matrix::zeros(n);
    if n > 0 {
        kernel.apply(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    }
    Ok(c)
}
