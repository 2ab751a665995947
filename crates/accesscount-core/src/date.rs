//! Calendar-day buckets and report windows.
//!
//! Counters are aggregated per calendar day. Hash fields use the compact
//! `YYYYMMDD` form; report headers use `YYYY-MM-DD`, which also sorts
//! lexicographically in date order.

use chrono::{Days, Local, NaiveDate};

/// One calendar day, the aggregation unit for all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateBucket(NaiveDate);

impl DateBucket {
    /// Bucket for the local wall-clock "now".
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Compact form used in hash fields (`YYYYMMDD`).
    pub fn storage(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Human form used in report headers (`YYYY-MM-DD`).
    pub fn display(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    fn back(&self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }
}

/// The `days` most recent calendar days ending at `end`, ascending.
///
/// `days` is remembered separately from the date list because the report
/// average always divides by the requested length.
#[derive(Debug, Clone)]
pub struct ReportWindow {
    dates: Vec<DateBucket>,
    days: u32,
}

impl ReportWindow {
    /// Window ending today.
    pub fn ending_today(days: u32) -> Self {
        Self::ending(DateBucket::today(), days)
    }

    /// Window ending at an arbitrary day.
    pub fn ending(end: DateBucket, days: u32) -> Self {
        let mut dates = Vec::with_capacity(days as usize);
        for back in (0..days).rev() {
            if let Some(d) = end.back(u64::from(back)) {
                dates.push(d);
            }
        }
        Self { dates, days }
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> &[DateBucket] {
        &self.dates
    }

    /// Requested window length (the average divisor).
    pub fn days(&self) -> u32 {
        self.days
    }
}
