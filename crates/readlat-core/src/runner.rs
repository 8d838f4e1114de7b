//! Per-backend measurement driver.

use tracing::{error, info, warn};

use crate::backends::ReadBackend;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::sampler::measure;
use crate::stats::{summarize, Summary};
use crate::workload::Payload;

/// Outcome of measuring one backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReport {
    /// Backend label, e.g. `fs_single`.
    pub label: String,
    /// Section title printed above the numbers.
    pub title: String,
    /// Number of measured iterations.
    pub samples: usize,
    /// Latency summary in milliseconds.
    pub summary: Summary,
}

/// Seeds, samples and summarizes backends one at a time.
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    iterations: usize,
    warmup: usize,
}

impl Runner {
    /// Create a runner with explicit iteration counts.
    pub fn new(iterations: usize, warmup: usize) -> Self {
        Self { iterations, warmup }
    }

    /// Create a runner from a benchmark configuration.
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.iterations, config.warmup)
    }

    /// Measure one backend: seed, warm up, sample, summarize, tear down.
    ///
    /// A seed or read failure aborts the backend; teardown is still attempted
    /// and the original error is returned.
    pub fn run(&self, backend: &mut dyn ReadBackend, payload: &Payload) -> Result<BackendReport> {
        let label = backend.label().to_string();
        info!(
            backend = %label,
            iterations = self.iterations,
            warmup = self.warmup,
            "measuring backend"
        );

        let outcome = self.seed_and_sample(backend, payload);

        if let Err(e) = backend.teardown() {
            warn!(backend = %label, error = %e, "teardown failed");
            if outcome.is_ok() {
                return Err(e);
            }
        }

        match outcome {
            Ok(report) => {
                info!(
                    backend = %label,
                    p50_ms = report.summary.p50,
                    p99_ms = report.summary.p99,
                    "backend done"
                );
                Ok(report)
            }
            Err(e) => {
                error!(backend = %label, error = %e, "backend aborted");
                Err(e)
            }
        }
    }

    fn seed_and_sample(
        &self,
        backend: &mut dyn ReadBackend,
        payload: &Payload,
    ) -> Result<BackendReport> {
        backend.seed(payload)?;
        let samples = measure(|| backend.read(), self.iterations, self.warmup)?;
        let summary = summarize(samples.as_millis())?;

        Ok(BackendReport {
            label: backend.label().to_string(),
            title: backend.title(),
            samples: samples.len(),
            summary,
        })
    }
}
