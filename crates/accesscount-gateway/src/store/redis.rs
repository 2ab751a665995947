//! Redis-backed counter store.
//!
//! A multiplexed `ConnectionManager` is held for the lifetime of the handle;
//! clones are cheap and reconnect on failure. Writes and the per-field reads
//! go through `redis::pipe()` so each call costs one round trip.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use accesscount_core::error::{AccessCountError, Result};

use super::{CounterStore, IncrementBatch};

pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect from a `redis://` URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| AccessCountError::Config(format!("invalid redis url: {e}")))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| AccessCountError::Store(format!("redis connect failed: {e}")))?;
        Ok(Self { conn })
    }

    /// Wrap an already-established connection.
    pub fn from_manager(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn apply(&self, batch: IncrementBatch) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let mut pipe = redis::pipe();
        for op in batch.ops() {
            pipe.hincr(&op.key, &op.field, op.delta).ignore();
        }
        let mut conn = self.conn.clone();
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(|e| AccessCountError::Store(format!("increment pipeline failed: {e}")))
    }

    async fn hash_fields(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }
        let mut pipe = redis::pipe();
        for field in fields {
            pipe.hget(key, field);
        }
        let mut conn = self.conn.clone();
        pipe.query_async::<Vec<Option<String>>>(&mut conn)
            .await
            .map_err(|e| AccessCountError::Store(format!("hash field fetch failed: {e}")))
    }

    async fn hash_all(&self, key: &str) -> Result<HashMap<String, String>> {
        let mut conn = self.conn.clone();
        conn.hgetall(key)
            .await
            .map_err(|e| AccessCountError::Store(format!("hash fetch failed: {e}")))
    }
}
