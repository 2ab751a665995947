#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::NaiveDate;

use accesscount_core::date::{DateBucket, ReportWindow};
use accesscount_core::keys::KeySchema;
use accesscount_core::AccessCountError;
use accesscount_gateway::report;
use accesscount_gateway::store::{resolve_store, MemoryStore};

fn bucket(day: u32) -> DateBucket {
    DateBucket::from_date(NaiveDate::from_ymd_opt(2024, 1, day).unwrap())
}

#[tokio::test]
async fn pv_table_fills_missing_days_and_averages_over_window() {
    let store = MemoryStore::new();
    let keys = KeySchema::default();
    store.set(keys.pv_key(), "20240101", 5);
    store.set(keys.pv_key(), "20240102", 7);
    // 2024-01-03 intentionally missing

    let window = ReportWindow::ending(bucket(3), 3);
    let table = report::pv_table(&store, &keys, window).await.unwrap();
    let rendered = table.to_string();

    let header = rendered
        .lines()
        .find(|l| l.contains("2024-01-01"))
        .expect("header row");
    assert!(header.contains("2024-01-03"));
    assert!(header.contains("average"));

    let data = rendered
        .lines()
        .find(|l| l.contains("| 5"))
        .expect("data row");
    assert!(data.contains("| 7"));
    assert!(data.contains("| 0"));
    assert!(data.contains("| 4"));
}

#[tokio::test]
async fn endpoint_ranking_is_descending_within_each_day() {
    let store = MemoryStore::new();
    let keys = KeySchema::default();
    store.set(keys.endpoint_key(), "20240101:/home", 10);
    store.set(keys.endpoint_key(), "20240101:/api", 25);

    let window = ReportWindow::ending(bucket(1), 1);
    let table = report::endpoint_table(&store, &keys, window).await.unwrap();
    let rendered = table.to_string();

    let api = rendered.find("/api").expect("/api row");
    let home = rendered.find("/home").expect("/home row");
    assert!(api < home, "higher count must rank first:\n{rendered}");
    assert!(rendered.contains("endpoint"));
    assert!(rendered.contains("25"));
}

#[tokio::test]
async fn endpoint_report_keeps_days_separate() {
    let store = MemoryStore::new();
    let keys = KeySchema::default();
    store.set(keys.endpoint_key(), "20240101:/old", 50);
    store.set(keys.endpoint_key(), "20240102:/fresh", 1);

    let window = ReportWindow::ending(bucket(2), 1);
    let table = report::endpoint_table(&store, &keys, window).await.unwrap();
    let rendered = table.to_string();

    assert!(rendered.contains("/fresh"));
    assert!(!rendered.contains("/old"));
}

#[tokio::test]
async fn unresolvable_store_is_a_loud_error() {
    let err = resolve_store(None, None).await.expect_err("must fail");
    assert!(matches!(err, AccessCountError::Config(_)));
}

#[tokio::test]
async fn zero_day_window_is_rejected() {
    let store = MemoryStore::new();
    let keys = KeySchema::default();
    let window = ReportWindow::ending(bucket(1), 0);
    let err = report::pv_table(&store, &keys, window)
        .await
        .expect_err("must fail");
    assert!(matches!(err, AccessCountError::BadRequest(_)));
}
