//! Store abstraction for the counter hashes.
//!
//! The writer and the reports both speak to a [`CounterStore`] handle owned
//! by the caller; there is no ambient per-request connection lookup.
//! [`RedisStore`] is the production implementation, [`MemoryStore`] backs
//! tests and local development.

pub mod memory;
pub mod redis;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use accesscount_core::error::{AccessCountError, Result};

pub use memory::MemoryStore;
pub use redis::RedisStore;

/// One hash-field increment.
#[derive(Debug, Clone)]
pub struct HashIncr {
    pub key: String,
    pub field: String,
    pub delta: i64,
}

/// A set of increments applied as a single store round trip.
#[derive(Debug, Clone, Default)]
pub struct IncrementBatch {
    ops: Vec<HashIncr>,
}

impl IncrementBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incr(&mut self, key: &str, field: &str, delta: i64) -> &mut Self {
        self.ops.push(HashIncr {
            key: key.to_string(),
            field: field.to_string(),
            delta,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[HashIncr] {
        &self.ops
    }
}

/// Counter hash operations needed by the writer and the reports.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Apply all increments in one pipelined round trip. The batch is not
    /// transactional: a failure mid-pipeline may leave it partially applied.
    async fn apply(&self, batch: IncrementBatch) -> Result<()>;

    /// Fetch the named fields of a hash in one round trip; missing fields
    /// come back as `None`.
    async fn hash_fields(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>>;

    /// Fetch an entire hash. Iteration order of the result is unspecified.
    async fn hash_all(&self, key: &str) -> Result<HashMap<String, String>>;
}

/// Resolve a usable store handle. An explicit URL wins over an existing
/// handle; neither configured is a config error.
pub async fn resolve_store(
    url: Option<&str>,
    existing: Option<Arc<dyn CounterStore>>,
) -> Result<Arc<dyn CounterStore>> {
    if let Some(url) = url {
        let store = RedisStore::connect(url).await?;
        return Ok(Arc::new(store));
    }
    existing.ok_or_else(|| AccessCountError::Config("no usable redis url or connection".into()))
}
