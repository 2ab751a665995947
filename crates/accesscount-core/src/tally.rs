//! Pure aggregation over raw counter hash contents.
//!
//! The store hands back strings; anything missing or non-numeric counts as
//! zero so a single corrupt field cannot take a report down.

use crate::date::DateBucket;
use crate::keys::KeySchema;

/// Parse a raw counter value. Missing or non-numeric -> 0.
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// One PV report row: per-date counts plus the trailing moving average.
#[derive(Debug, Clone, PartialEq)]
pub struct PvRow {
    pub counts: Vec<u64>,
    pub average: f64,
}

/// Build the PV row from per-date raw values, in window order.
///
/// The average divides by the requested window length, not the number of
/// days that actually have data.
pub fn pv_row(values: &[Option<String>], days: u32) -> PvRow {
    let counts: Vec<u64> = values.iter().map(|v| parse_count(v.as_deref())).collect();
    let sum: u64 = counts.iter().sum();
    let average = sum as f64 / f64::from(days);
    PvRow { counts, average }
}

/// Rank one day's endpoints by request count, descending.
///
/// The sort is stable, so equal counts keep the iteration order of
/// `entries`; for a real store that order is implementation-defined.
pub fn rank_endpoints<'a, I>(entries: I, bucket: DateBucket) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let day = bucket.storage();
    let mut ranked: Vec<(String, u64)> = entries
        .into_iter()
        .filter_map(|(field, raw)| {
            let (field_day, endpoint) = KeySchema::split_endpoint_field(field)?;
            if field_day != day {
                return None;
            }
            Some((endpoint.to_string(), parse_count(Some(raw))))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
