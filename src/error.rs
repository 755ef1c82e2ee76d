use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatmulError {
    #[error("invalid dimension: {what} expected {expected}, got {got}")]
    InvalidDimension {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("block size must be at least 1")]
    InvalidBlockSize,
    #[error("unknown kernel '{0}' (expected ijk, ikj, kij, ijk-t, blocked or blocked:<size>)")]
    UnknownKernel(String),
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),
    #[error("{kernel} differs from {baseline} by {max_diff:e} (tolerance {tolerance:e})")]
    VerificationFailed {
        kernel: String,
        baseline: String,
        max_diff: f64,
        tolerance: f64,
    },
}

pub type Result<T> = std::result::Result<T, MatmulError>;
