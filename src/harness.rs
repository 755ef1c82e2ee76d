//! Benchmark driver.
//!
//! For each size: generate A and B once, optionally check every kernel
//! against the baseline, then time each kernel `runs` times. Only the
//! multiply call sits inside the timed region; input generation and
//! verification are not.

use std::hint::black_box;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::matrix::random::random_matrix_seeded;
use crate::stats::Summary;
use crate::{Kernel, multiply};

pub const DEFAULT_SIZES: [usize; 3] = [64, 128, 256];
pub const DEFAULT_RUNS: usize = 5;
pub const DEFAULT_SEED_A: u64 = 42;
pub const DEFAULT_SEED_B: u64 = 43;
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Matrix dimensions to sweep, in order.
    pub sizes: Vec<usize>,
    /// Timed runs per kernel per size.
    pub runs: usize,
    /// Untimed runs per kernel per size before timing starts.
    pub warmup: usize,
    pub seed_a: u64,
    pub seed_b: u64,
    /// Kernels to time. The first one is the baseline for speedups and
    /// verification.
    pub kernels: Vec<Kernel>,
    /// Compare every kernel's product against the baseline's.
    pub verify: bool,
    /// Largest allowed per-entry difference when verifying.
    pub tolerance: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            warmup: 0,
            seed_a: DEFAULT_SEED_A,
            seed_b: DEFAULT_SEED_B,
            kernels: Kernel::DEFAULT_SET.to_vec(),
            verify: true,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(MatmulError::InvalidConfig("no matrix sizes given".into()));
        }
        if self.sizes.contains(&0) {
            return Err(MatmulError::InvalidConfig(
                "matrix sizes must be at least 1".into(),
            ));
        }
        if self.runs == 0 {
            return Err(MatmulError::InvalidConfig("runs must be at least 1".into()));
        }
        if self.kernels.is_empty() {
            return Err(MatmulError::InvalidConfig("no kernels given".into()));
        }
        if self
            .kernels
            .iter()
            .any(|k| matches!(k, Kernel::Blocked { block_size: 0 }))
        {
            return Err(MatmulError::InvalidBlockSize);
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MatmulError::InvalidConfig(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Timings for one kernel at one size.
#[derive(Debug, Clone, Serialize)]
pub struct KernelReport {
    pub kernel: String,
    /// Elapsed seconds per timed run, in run order.
    pub samples: Vec<f64>,
    pub summary: Summary,
    /// 2n³ flops over the mean time.
    pub gflops: f64,
    /// Baseline mean over this kernel's mean. `None` for the baseline.
    pub speedup: Option<f64>,
}

/// Every kernel's timings at one size.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub size: usize,
    pub runs: usize,
    pub kernels: Vec<KernelReport>,
}

/// Time `runs` calls of `kernel` on `a * b`, after `warmup` untimed calls.
///
/// Returns one elapsed time in seconds per run. Each run gets a freshly
/// allocated result, dropped after the clock stops.
pub fn time_kernel(
    kernel: Kernel,
    a: &Matrix,
    b: &Matrix,
    runs: usize,
    warmup: usize,
) -> Result<Vec<f64>> {
    for _ in 0..warmup {
        black_box(multiply(black_box(a), black_box(b), kernel)?);
    }

    let mut samples = Vec::with_capacity(runs);
    for _ in 0..runs {
        let start = Instant::now();
        let c = multiply(black_box(a), black_box(b), kernel)?;
        let elapsed = start.elapsed().as_secs_f64();
        black_box(c);
        samples.push(elapsed);
    }
    Ok(samples)
}

/// Check that every kernel agrees with the first one on `a * b`.
pub fn verify_kernels(kernels: &[Kernel], a: &Matrix, b: &Matrix, tolerance: f64) -> Result<()> {
    let Some((&baseline, rest)) = kernels.split_first() else {
        return Ok(());
    };
    let expected = multiply(a, b, baseline)?;

    for &kernel in rest {
        let actual = multiply(a, b, kernel)?;
        let max_diff = expected.max_abs_diff(&actual)?;
        debug!(%kernel, %baseline, max_diff, "verified");
        if max_diff.is_nan() || max_diff > tolerance {
            return Err(MatmulError::VerificationFailed {
                kernel: kernel.label(),
                baseline: baseline.label(),
                max_diff,
                tolerance,
            });
        }
    }
    Ok(())
}

/// Benchmark every configured kernel at size `n`.
pub fn run_size(config: &BenchConfig, n: usize) -> Result<SizeReport> {
    config.validate()?;
    info!(n, runs = config.runs, "benchmarking size");

    let a = random_matrix_seeded(n, config.seed_a);
    let b = random_matrix_seeded(n, config.seed_b);

    if config.verify {
        verify_kernels(&config.kernels, &a, &b, config.tolerance)?;
    }

    let flops = 2.0 * (n as f64).powi(3);
    let mut kernels = Vec::with_capacity(config.kernels.len());
    for &kernel in &config.kernels {
        let samples = time_kernel(kernel, &a, &b, config.runs, config.warmup)?;
        let summary = Summary::from_samples(&samples);
        debug!(%kernel, mean = summary.mean, stddev = summary.stddev, "timed");
        kernels.push(KernelReport {
            kernel: kernel.label(),
            samples,
            summary,
            gflops: if summary.mean > 0.0 {
                flops / summary.mean / 1e9
            } else {
                0.0
            },
            speedup: None,
        });
    }

    let baseline_mean = kernels[0].summary.mean;
    for report in kernels.iter_mut().skip(1) {
        report.speedup = Some(speedup(baseline_mean, report.summary.mean));
    }

    Ok(SizeReport {
        size: n,
        runs: config.runs,
        kernels,
    })
}

/// Benchmark every configured size, in order.
pub fn run(config: &BenchConfig) -> Result<Vec<SizeReport>> {
    config.validate()?;
    config.sizes.iter().map(|&n| run_size(config, n)).collect()
}

/// Baseline mean over candidate mean. Infinite when the candidate was too
/// fast for the clock to register.
pub fn speedup(baseline_mean: f64, candidate_mean: f64) -> f64 {
    if candidate_mean > 0.0 {
        baseline_mean / candidate_mean
    } else {
        f64::INFINITY
    }
}
