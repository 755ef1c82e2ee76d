//! Summary statistics over timing samples.
//!
//! All functions return 0.0 for an empty slice rather than NaN, so a report
//! built from no samples still prints.

use serde::Serialize;

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation: divides by the number of samples, not
/// by one less.
///
/// ```
/// use matmul_loops::stats::stddev;
///
/// let s = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(stddev(&s), 2.0);
/// ```
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let variance = samples.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Middle value, or the mean of the two middle values for an even count.
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Summary {
    pub fn from_samples(samples: &[f64]) -> Self {
        let (min, max) = if samples.is_empty() {
            (0.0, 0.0)
        } else {
            samples
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                    (lo.min(x), hi.max(x))
                })
        };
        Self {
            mean: mean(samples),
            stddev: stddev(samples),
            min,
            max,
            median: median(samples),
        }
    }
}
