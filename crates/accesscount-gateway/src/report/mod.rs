//! Read-side reports over the counter hashes.
//!
//! Both reports fetch, aggregate, and print. Failures on this path are loud
//! (`Result`), unlike the write path: a broken store aborts the report.

mod table;

use comfy_table::Table;

use accesscount_core::date::ReportWindow;
use accesscount_core::error::{AccessCountError, Result};
use accesscount_core::keys::KeySchema;
use accesscount_core::tally;

use crate::store::CounterStore;

/// Print the daily PV table for the `days` most recent days.
pub async fn report_pv(store: &dyn CounterStore, keys: &KeySchema, days: u32) -> Result<()> {
    let table = pv_table(store, keys, ReportWindow::ending_today(days)).await?;
    println!("{table}");
    Ok(())
}

/// Print the per-day endpoint ranking for the `days` most recent days.
pub async fn report_endpoints(store: &dyn CounterStore, keys: &KeySchema, days: u32) -> Result<()> {
    let table = endpoint_table(store, keys, ReportWindow::ending_today(days)).await?;
    println!("{table}");
    Ok(())
}

/// Build the PV table for an explicit window.
///
/// One batched fetch of PV\[date\] per window date; missing or non-numeric
/// values count as zero. The trailing column is `sum / days`.
pub async fn pv_table(
    store: &dyn CounterStore,
    keys: &KeySchema,
    window: ReportWindow,
) -> Result<Table> {
    check_window(&window)?;
    let fields: Vec<String> = window.dates().iter().map(|d| d.storage()).collect();
    let values = store.hash_fields(keys.pv_key(), &fields).await?;
    let row = tally::pv_row(&values, window.days());
    Ok(table::pv(&window, &row))
}

/// Build the endpoint table for an explicit window.
///
/// One full-hash fetch, then a per-date filter and a stable descending sort
/// by count. Equal counts keep the store's iteration order, which is
/// implementation-defined; across stores ties are not deterministic.
pub async fn endpoint_table(
    store: &dyn CounterStore,
    keys: &KeySchema,
    window: ReportWindow,
) -> Result<Table> {
    check_window(&window)?;
    let entries = store.hash_all(keys.endpoint_key()).await?;
    let ranked: Vec<Vec<(String, u64)>> = window
        .dates()
        .iter()
        .map(|d| {
            tally::rank_endpoints(entries.iter().map(|(k, v)| (k.as_str(), v.as_str())), *d)
        })
        .collect();
    Ok(table::endpoints(&window, &ranked))
}

fn check_window(window: &ReportWindow) -> Result<()> {
    if window.days() == 0 {
        return Err(AccessCountError::BadRequest("days must be >= 1".into()));
    }
    Ok(())
}
