//! Key-value cache backend.
//!
//! One key holds the payload bytes. The client sits behind [`CacheClient`] so
//! the backend logic runs the same against Redis or an in-process store.

use tracing::{debug, info};

use super::{ReadBackend, CACHE_KEY};
use crate::error::{Error, Result};
use crate::workload::Payload;

/// Minimal cache client: a `SET` and a `GET` on raw bytes.
pub trait CacheClient {
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Fetch the value under `key`, `None` if absent.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;
}

impl CacheClient for redis::Connection {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        redis::cmd("SET").arg(key).arg(value).query::<()>(self)?;
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> = redis::cmd("GET").arg(key).query(self)?;
        Ok(value)
    }
}

/// Cache backend for benchmarks.
pub struct CacheBackend<C> {
    client: C,
    key: String,
}

/// Cache backend talking to a Redis server.
pub type RedisBackend = CacheBackend<redis::Connection>;

impl<C: CacheClient> CacheBackend<C> {
    /// Wrap `client`, storing the payload under the default key.
    pub fn new(client: C) -> Self {
        Self::with_key(client, CACHE_KEY)
    }

    /// Wrap `client`, storing the payload under `key`.
    pub fn with_key(client: C, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }

    /// Key the payload lives under.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl RedisBackend {
    /// Open a connection to the Redis server at `url`.
    pub fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection = client.get_connection()?;
        info!("connected to Redis");
        Ok(Self::new(connection))
    }

    /// Connect using the `REDIS_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("REDIS_URL")
            .map_err(|_| Error::Config("REDIS_URL environment variable not set".into()))?;
        Self::connect(&url)
    }
}

impl<C: CacheClient> ReadBackend for CacheBackend<C> {
    fn label(&self) -> &str {
        "redis"
    }

    fn title(&self) -> String {
        format!("Redis — GET {}", self.key)
    }

    fn seed(&mut self, payload: &Payload) -> Result<()> {
        self.client.set(&self.key, payload.as_bytes())?;
        debug!(key = %self.key, bytes = payload.len(), "seeded cache key");
        Ok(())
    }

    fn read(&mut self) -> Result<String> {
        let bytes = self.client.get(&self.key)?.ok_or_else(|| Error::KeyAbsent {
            key: self.key.clone(),
        })?;
        Ok(String::from_utf8(bytes)?)
    }
}
