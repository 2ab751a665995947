//! In-memory counter store.
//!
//! Backed by `DashMap` keyed by (hash key, field). Used by tests and as a
//! local development stand-in; contents vanish with the process.

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use accesscount_core::error::Result;

use super::{CounterStore, IncrementBatch};

#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<(String, String), i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one field, if set.
    pub fn get(&self, key: &str, field: &str) -> Option<i64> {
        self.entries
            .get(&(key.to_string(), field.to_string()))
            .map(|v| *v)
    }

    /// Seed a field value directly.
    pub fn set(&self, key: &str, field: &str, value: i64) {
        self.entries
            .insert((key.to_string(), field.to_string()), value);
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn apply(&self, batch: IncrementBatch) -> Result<()> {
        for op in batch.ops() {
            let mut slot = self
                .entries
                .entry((op.key.clone(), op.field.clone()))
                .or_insert(0);
            *slot += op.delta;
        }
        Ok(())
    }

    async fn hash_fields(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>> {
        Ok(fields
            .iter()
            .map(|f| self.get(key, f).map(|v| v.to_string()))
            .collect())
    }

    async fn hash_all(&self, key: &str) -> Result<HashMap<String, String>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.key().0 == key)
            .map(|e| (e.key().1.clone(), e.value().to_string()))
            .collect())
    }
}
