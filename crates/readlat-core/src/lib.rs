//! Read-latency benchmark engine.
//!
//! Measures how long it takes to read the same text payload back from
//! different storage backends and reduces the timings to comparable
//! latency percentiles.
//!
//! # Components
//!
//! - **Workload**: synthetic markdown-style payload of an exact size
//! - **Sampler**: warmup + timed iterations of an opaque read
//! - **Stats**: nearest-rank p50/p95/p99, mean, max
//! - **Backends**: single file, fan-out files, PostgreSQL, SQLite, Redis
//! - **Runner / Report**: per-backend driver and console formatting

pub mod backends;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod sampler;
pub mod stats;
pub mod workload;

pub use backends::{
    CacheBackend, CacheClient, ConcurrentFileBackend, ReadBackend, RedisBackend,
    SingleFileBackend, SqliteBackend,
};
#[cfg(feature = "postgres")]
pub use backends::PostgresBackend;
pub use config::{BackendKind, BenchConfig};
pub use error::{Error, Result};
pub use runner::{BackendReport, Runner};
pub use sampler::{measure, SampleSet};
pub use stats::{percentile, summarize, Summary};
pub use workload::{generate_context, Payload};
