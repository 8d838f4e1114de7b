//! Warmup + measurement protocol.
//!
//! The sampler times one opaque operation at a time. Concurrency, when a
//! backend wants it, lives inside the operation; iterations never overlap.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::Result;

/// Per-iteration latencies in milliseconds, in the order they were taken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<f64>,
}

impl SampleSet {
    /// Create an empty sample set with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a measured duration.
    pub fn record(&mut self, elapsed: Duration) {
        self.samples.push(elapsed.as_nanos() as f64 / 1_000_000.0);
    }

    /// Samples in milliseconds.
    pub fn as_millis(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples were recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<f64>> for SampleSet {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

/// Run `operation` `warmup` times untimed, then `iterations` times timed.
///
/// Any error aborts the run immediately; no partial sample set is returned.
pub fn measure<F, T>(mut operation: F, iterations: usize, warmup: usize) -> Result<SampleSet>
where
    F: FnMut() -> Result<T>,
{
    for _ in 0..warmup {
        black_box(operation()?);
    }

    let mut samples = SampleSet::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        let output = operation()?;
        let elapsed = start.elapsed();
        black_box(output);
        samples.record(elapsed);
    }

    Ok(samples)
}
