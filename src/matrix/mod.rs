//! The matrix type, input generation and the loop-order kernels.
//!
//! The slice kernels take row-major n × n buffers and accumulate into `c`
//! (C += A * B). They do no shape checking beyond `debug_assert!`; go
//! through [`crate::multiply`] for validated calls.

pub mod dense;
pub mod naive_ijk;
pub mod naive_ikj;
pub mod naive_kij;
pub mod random;
pub mod transpose;

pub use dense::Matrix;
