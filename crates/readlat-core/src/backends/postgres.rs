//! PostgreSQL backend.
//!
//! Requires a running PostgreSQL instance. Enabled by the `postgres` feature.
//!
//! The harness is synchronous, so the backend owns a current-thread Tokio
//! runtime and blocks on each query. A pool capped at one connection keeps
//! every read on the same session.

use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use super::{ReadBackend, DOCUMENT_ID};
use crate::error::{Error, Result};
use crate::workload::Payload;

/// PostgreSQL backend for benchmarks.
pub struct PostgresBackend {
    pool: PgPool,
    rt: Runtime,
}

impl PostgresBackend {
    /// Connect to the database at `database_url`.
    pub fn connect(database_url: &str) -> Result<Self> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Runtime(e.to_string()))?;

        let pool = rt.block_on(async {
            PgPoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await
        })?;

        info!("connected to PostgreSQL");
        Ok(Self { pool, rt })
    }

    /// Connect using the `DATABASE_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| Error::Config("DATABASE_URL environment variable not set".into()))?;
        Self::connect(&database_url)
    }
}

impl ReadBackend for PostgresBackend {
    fn label(&self) -> &str {
        "postgres"
    }

    fn title(&self) -> String {
        format!("PostgreSQL — SELECT content WHERE id = {}", DOCUMENT_ID)
    }

    fn seed(&mut self, payload: &Payload) -> Result<()> {
        self.rt.block_on(async {
            sqlx::query("CREATE TABLE IF NOT EXISTS documents (id INT PRIMARY KEY, content TEXT)")
                .execute(&self.pool)
                .await?;

            sqlx::query(
                "INSERT INTO documents (id, content) VALUES ($1, $2) \
                 ON CONFLICT (id) DO UPDATE SET content = EXCLUDED.content",
            )
            .bind(DOCUMENT_ID)
            .bind(payload.as_str())
            .execute(&self.pool)
            .await?;

            Ok::<_, sqlx::Error>(())
        })?;

        debug!(id = DOCUMENT_ID, bytes = payload.len(), "seeded postgres row");
        Ok(())
    }

    fn read(&mut self) -> Result<String> {
        let row: Option<(String,)> = self.rt.block_on(async {
            sqlx::query_as("SELECT content FROM documents WHERE id = $1")
                .bind(DOCUMENT_ID)
                .fetch_optional(&self.pool)
                .await
        })?;

        row.map(|(content,)| content)
            .ok_or(Error::RowMissing { id: DOCUMENT_ID })
    }

    fn teardown(&mut self) -> Result<()> {
        self.rt.block_on(async {
            sqlx::query("DROP TABLE IF EXISTS documents")
                .execute(&self.pool)
                .await
        })?;
        Ok(())
    }
}

impl Drop for PostgresBackend {
    fn drop(&mut self) {
        self.rt.block_on(self.pool.close());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
    fn test_repeated_reads_are_stable() {
        let mut backend = PostgresBackend::from_env().unwrap();
        backend.seed(&Payload::from("X")).unwrap();

        assert_eq!(backend.read().unwrap(), "X");
        assert_eq!(backend.read().unwrap(), "X");

        backend.teardown().unwrap();
    }

    #[test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
    fn test_seed_is_an_upsert() {
        let mut backend = PostgresBackend::from_env().unwrap();
        backend.seed(&Payload::from("first")).unwrap();
        backend.seed(&Payload::from("second")).unwrap();
        assert_eq!(backend.read().unwrap(), "second");

        backend.teardown().unwrap();
        assert!(backend.read().is_err());
    }
}
