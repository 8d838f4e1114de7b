//! Latency statistics over a sample set.
//!
//! Percentiles use the nearest-rank method: the sorted samples are indexed
//! directly at `floor(len * p / 100)`, so every reported percentile is a value
//! that was actually observed.

use crate::error::{Error, Result};

/// Summary of one backend's latency distribution, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
    pub mean: f64,
    pub max: f64,
}

/// Nearest-rank percentile of `samples` for `p` in `0.0..=100.0`.
///
/// The input is left untouched; a sorted copy is indexed.
pub fn percentile(samples: &[f64], p: f64) -> Result<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_of_sorted(&sorted, p)
}

fn percentile_of_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::EmptySamples);
    }
    let last = sorted.len() - 1;
    let rank = (sorted.len() as f64 * p / 100.0).floor();
    // Negative ranks saturate to 0 on the cast.
    let idx = (rank as usize).min(last);
    Ok(sorted[idx])
}

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(Error::EmptySamples);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Largest sample.
pub fn max(samples: &[f64]) -> Result<f64> {
    samples
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .ok_or(Error::EmptySamples)
}

/// Compute p50/p95/p99/mean/max over `samples`.
pub fn summarize(samples: &[f64]) -> Result<Summary> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(Summary {
        p50: percentile_of_sorted(&sorted, 50.0)?,
        p95: percentile_of_sorted(&sorted, 95.0)?,
        p99: percentile_of_sorted(&sorted, 99.0)?,
        mean: mean(samples)?,
        max: max(samples)?,
    })
}
