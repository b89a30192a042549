//! Calendar date helpers for walking backfill windows.

use chrono::{Days, NaiveDate};

/// Iterates each calendar day in `[start, end)` in ascending order.
///
/// Yields nothing when `start >= end`.
///
/// # Example
/// ```ignore
/// let start = NaiveDate::from_ymd_opt(2020, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
///
/// let days: Vec<_> = date_range(start, end).collect();
/// // 2020-12-30, 2020-12-31, 2021-01-01
/// ```
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |day| day.checked_add_days(Days::new(1)))
        .take_while(move |day| *day < end)
}

/// Number of days in `[start, end)`, zero for empty or inverted ranges.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> u64 {
    u64::try_from((end - start).num_days()).unwrap_or(0)
}
