use std::collections::BTreeMap;

use chrono::Datelike;

use crate::api::{YearCount, YearlyCounts};
use crate::models::Record;

/// Dated records per calendar year, ascending by year.
pub fn build_yearly_counts(records: &[Record]) -> YearlyCounts {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for date in records.iter().filter_map(|r| r.date) {
        *counts.entry(date.year()).or_default() += 1;
    }

    YearlyCounts {
        years: counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}
