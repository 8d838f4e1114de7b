//! Benchmark error types.

use thiserror::Error;

/// Benchmark errors.
///
/// Every variant is fatal to the backend that raised it; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// PostgreSQL error.
    #[cfg(feature = "postgres")]
    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// SQLite error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Cache server error.
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Async runtime could not be built.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// A seeded cache key was not found.
    #[error("key absent: {key}")]
    KeyAbsent {
        /// The missing key.
        key: String,
    },

    /// A seeded row was not found.
    #[error("row missing: id = {id}")]
    RowMissing {
        /// The primary key that was looked up.
        id: i32,
    },

    /// Stored bytes did not decode as UTF-8.
    #[error("invalid utf-8 in stored value: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A backend was read before it was seeded.
    #[error("backend not seeded: {0}")]
    NotSeeded(&'static str),

    /// Statistics were requested over an empty sample set.
    #[error("empty sample set")]
    EmptySamples,

    /// A fan-out read worker panicked.
    #[error("read worker panicked")]
    WorkerPanicked,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, Error>;
