//! Storage backends under measurement.
//!
//! Every backend is seeded once with the shared payload and then read back
//! through the same [`ReadBackend`] interface, so the sampler and statistics
//! code never needs to know what it is timing.

pub mod cache;
pub mod concurrent;
pub mod file;
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use cache::{CacheBackend, CacheClient, RedisBackend};
pub use concurrent::{split_chunks, ConcurrentFileBackend};
pub use file::SingleFileBackend;
pub use sqlite::SqliteBackend;

#[cfg(feature = "postgres")]
pub use postgres::PostgresBackend;

use crate::error::Result;
use crate::workload::Payload;

/// Table the relational backends store the payload in.
pub const DOCUMENTS_TABLE: &str = "documents";

/// Primary key of the single payload row.
pub const DOCUMENT_ID: i32 = 1;

/// Key the cache backend stores the payload under.
pub const CACHE_KEY: &str = "context";

/// A storage backend that can be seeded with a payload and read back.
pub trait ReadBackend {
    /// Short machine-readable name, e.g. `fs_single`.
    fn label(&self) -> &str;

    /// Human-readable section title for the report.
    fn title(&self) -> String;

    /// Store `payload` so that subsequent reads return it.
    ///
    /// Calling this again overwrites the previous payload.
    fn seed(&mut self, payload: &Payload) -> Result<()>;

    /// Read the stored payload back in full.
    fn read(&mut self) -> Result<String>;

    /// Release anything `seed` created outside the process.
    fn teardown(&mut self) -> Result<()> {
        Ok(())
    }
}
