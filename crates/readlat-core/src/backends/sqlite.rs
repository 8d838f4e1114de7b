//! SQLite backend.
//!
//! Embedded counterpart of the PostgreSQL backend: same table, same upsert,
//! same point lookup. Useful when no database server is available.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::{ReadBackend, DOCUMENT_ID};
use crate::error::{Error, Result};
use crate::workload::Payload;

/// SQLite backend for benchmarks.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Create a new in-memory SQLite database.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Open (or create) an SQLite database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }
}

impl ReadBackend for SqliteBackend {
    fn label(&self) -> &str {
        "sqlite"
    }

    fn title(&self) -> String {
        format!("SQLite — SELECT content WHERE id = {}", DOCUMENT_ID)
    }

    fn seed(&mut self, payload: &Payload) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (id INTEGER PRIMARY KEY, content TEXT)",
            [],
        )?;
        self.conn.execute(
            "INSERT INTO documents (id, content) VALUES (?1, ?2) \
             ON CONFLICT(id) DO UPDATE SET content = excluded.content",
            params![DOCUMENT_ID, payload.as_str()],
        )?;
        debug!(id = DOCUMENT_ID, bytes = payload.len(), "seeded sqlite row");
        Ok(())
    }

    fn read(&mut self) -> Result<String> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT content FROM documents WHERE id = ?1")?;
        let content = stmt
            .query_row(params![DOCUMENT_ID], |row| row.get::<_, String>(0))
            .optional()?;
        content.ok_or(Error::RowMissing { id: DOCUMENT_ID })
    }

    fn teardown(&mut self) -> Result<()> {
        self.conn.execute("DROP TABLE IF EXISTS documents", [])?;
        Ok(())
    }
}
