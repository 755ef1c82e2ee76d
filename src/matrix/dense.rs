//! Owned square matrix type.

use std::ops::Index;

use crate::error::{MatmulError, Result};

/// A dense n×n matrix of `f64`, stored row-major in one contiguous buffer.
///
/// The shape is checked once at construction, so every `Matrix` is square.
/// The slice kernels in [`crate::matrix`] and [`crate::blocked`] work on
/// [`Matrix::as_slice`] directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// An n×n matrix of zeros. `n = 0` gives an empty matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wrap a row-major buffer of `n * n` elements.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n * n {
            return Err(MatmulError::InvalidDimension {
                what: "element count",
                expected: n * n,
                got: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    pub(crate) fn from_parts(n: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { n, data }
    }

    /// Build from a list of rows. Every row must have as many entries as
    /// there are rows.
    ///
    /// ```
    /// use matmul_loops::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.dim(), 2);
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MatmulError::InvalidDimension {
                    what: "row length",
                    expected: n,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_dim(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| x + y)
            .collect();
        Ok(Matrix { n: self.n, data })
    }

    /// Largest absolute element-wise difference. 0.0 for empty matrices.
    pub fn max_abs_diff(&self, other: &Matrix) -> Result<f64> {
        self.check_same_dim(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max))
    }

    /// True when both matrices have the same size and every pair of entries
    /// differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.max_abs_diff(other)
            .is_ok_and(|diff| diff <= tolerance)
    }

    fn check_same_dim(&self, other: &Matrix) -> Result<()> {
        if self.n != other.n {
            return Err(MatmulError::InvalidDimension {
                what: "operand size",
                expected: self.n,
                got: other.n,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.n + j]
    }
}
