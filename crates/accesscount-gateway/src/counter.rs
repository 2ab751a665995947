//! Request-time counter writer.
//!
//! One call per completed request. Both increments ride a single pipelined
//! batch, and nothing here propagates an error: a counting failure must not
//! turn into a failed response, so every failure path ends in a log line.

use std::sync::Arc;

use accesscount_core::date::DateBucket;
use accesscount_core::keys::KeySchema;

use crate::store::{CounterStore, IncrementBatch};

pub struct AccessCounter {
    store: Option<Arc<dyn CounterStore>>,
    keys: KeySchema,
}

impl AccessCounter {
    pub fn new(store: Option<Arc<dyn CounterStore>>, keys: KeySchema) -> Self {
        Self { store, keys }
    }

    /// Count one completed request against today's buckets.
    pub async fn record(&self, endpoint: Option<&str>) {
        self.record_on(DateBucket::today(), endpoint).await;
    }

    /// Count against an explicit day. The request path always goes through
    /// [`Self::record`]; this entry point lets tests pin the clock.
    pub async fn record_on(&self, bucket: DateBucket, endpoint: Option<&str>) {
        let Some(store) = &self.store else {
            tracing::error!("access counter found no usable redis url or connection");
            return;
        };

        let mut batch = IncrementBatch::new();
        batch.incr(self.keys.pv_key(), &bucket.storage(), 1);
        if let Some(endpoint) = endpoint {
            batch.incr(
                self.keys.endpoint_key(),
                &KeySchema::endpoint_field(bucket, endpoint),
                1,
            );
        }

        if let Err(e) = store.apply(batch).await {
            tracing::error!(error = %e, "access counter write failed");
        }
    }
}
