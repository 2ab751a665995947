#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use chrono::NaiveDate;

use accesscount_core::date::DateBucket;
use accesscount_core::keys::KeySchema;
use accesscount_gateway::counter::AccessCounter;
use accesscount_gateway::store::{CounterStore, MemoryStore};

fn bucket() -> DateBucket {
    DateBucket::from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
}

fn counter_with(store: &Arc<MemoryStore>) -> AccessCounter {
    AccessCounter::new(Some(store.clone()), KeySchema::default())
}

#[tokio::test]
async fn pv_only_when_endpoint_is_absent() {
    let store = Arc::new(MemoryStore::new());
    let keys = KeySchema::default();
    let counter = counter_with(&store);

    counter.record_on(bucket(), None).await;

    assert_eq!(store.get(keys.pv_key(), "20240101"), Some(1));
    assert!(store.hash_all(keys.endpoint_key()).await.unwrap().is_empty());
}

#[tokio::test]
async fn both_counters_when_endpoint_is_present() {
    let store = Arc::new(MemoryStore::new());
    let keys = KeySchema::default();
    let counter = counter_with(&store);

    counter.record_on(bucket(), Some("/api")).await;

    assert_eq!(store.get(keys.pv_key(), "20240101"), Some(1));
    assert_eq!(store.get(keys.endpoint_key(), "20240101:/api"), Some(1));
}

#[tokio::test]
async fn writer_without_store_is_a_logged_noop() {
    let counter = AccessCounter::new(None, KeySchema::default());

    // Must return without panicking; there is no store to mutate and no
    // error surface past the call.
    counter.record_on(bucket(), Some("/api")).await;
}

#[tokio::test]
async fn repeated_calls_double_count() {
    let store = Arc::new(MemoryStore::new());
    let keys = KeySchema::default();
    let counter = counter_with(&store);

    counter.record_on(bucket(), Some("/api")).await;
    counter.record_on(bucket(), Some("/api")).await;

    assert_eq!(store.get(keys.pv_key(), "20240101"), Some(2));
    assert_eq!(store.get(keys.endpoint_key(), "20240101:/api"), Some(2));
}

#[tokio::test]
async fn written_counts_read_back_via_field_fetch() {
    let store = Arc::new(MemoryStore::new());
    let keys = KeySchema::default();
    let counter = counter_with(&store);

    for _ in 0..3 {
        counter.record_on(bucket(), None).await;
    }

    let values = store
        .hash_fields(keys.pv_key(), &["20240101".to_string()])
        .await
        .unwrap();
    assert_eq!(values, vec![Some("3".to_string())]);
}

#[tokio::test]
async fn days_are_bucketed_separately() {
    let store = Arc::new(MemoryStore::new());
    let keys = KeySchema::default();
    let counter = counter_with(&store);

    let next = DateBucket::from_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    counter.record_on(bucket(), Some("/api")).await;
    counter.record_on(next, Some("/api")).await;

    assert_eq!(store.get(keys.pv_key(), "20240101"), Some(1));
    assert_eq!(store.get(keys.pv_key(), "20240102"), Some(1));
    assert_eq!(store.get(keys.endpoint_key(), "20240101:/api"), Some(1));
    assert_eq!(store.get(keys.endpoint_key(), "20240102:/api"), Some(1));
}
