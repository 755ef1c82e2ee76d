//! Cache-blocked kernels.
//!
//! These split the product into square tiles small enough to stay in cache
//! and run the naive inner loops one tile at a time.

pub mod tiled;

pub use tiled::{DEFAULT_BLOCK_SIZE, matmul_blocked};
