//! Raw spreadsheet rows to canonical records.
//!
//! The normalizer never fails: blank cells and unparseable dates become absent
//! values. Each comma-separated author token turns into its own record, so one
//! bill with N authors yields N records sharing every other field.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::debug;
use regex::Regex;

use crate::models::{RawRow, Record};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn url_pattern() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"http\S+").expect("URL pattern is valid"))
}

/// Normalize raw rows into records.
///
/// `links` is aligned with `rows` by position; a missing position or a blank
/// entry means the bill has no link.
pub fn normalize(rows: &[RawRow], links: &[Option<String>]) -> Vec<Record> {
    let mut records = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let date = row.date.as_deref().and_then(|raw| {
            let parsed = parse_date(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                debug!("Row {}: unparseable date '{}', treating as absent", index, raw);
            }
            parsed
        });
        let title = row
            .title_and_link
            .as_deref()
            .map(strip_urls)
            .unwrap_or_default();
        let link = clean(links.get(index).and_then(|l| l.as_deref()));
        let policy_area = clean(row.policy_area.as_deref());
        let enactment_method = clean(row.enactment_method.as_deref());

        for author in split_authors(row.authors.as_deref()) {
            records.push(Record {
                author,
                date,
                policy_area: policy_area.clone(),
                enactment_method: enactment_method.clone(),
                title: title.clone(),
                link: link.clone(),
            });
        }
    }

    records
}

/// Records with a present date, in input order.
pub fn working_set(records: &[Record]) -> Vec<Record> {
    records.iter().filter(|r| r.is_dated()).cloned().collect()
}

/// Split an author cell on commas.
///
/// Always yields one entry per token; blank tokens (and a blank or missing
/// cell) become `None`.
pub fn split_authors(field: Option<&str>) -> Vec<Option<String>> {
    match field {
        None => vec![None],
        Some(field) => field.split(',').map(|token| clean(Some(token))).collect(),
    }
}

/// Remove embedded URLs (`http` up to the next whitespace) and trim.
pub fn strip_urls(text: &str) -> String {
    url_pattern().replace_all(text, "").trim().to_string()
}

/// Parse a calendar date from the textual forms seen in tracker exports.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // `%Y` also accepts one- and two-digit years, so "3/4/21" would otherwise
    // land in year 21 instead of falling through to `%y`.
    let plausible = |d: &NaiveDate| (1000..=9999).contains(&d.year());

    DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .find(plausible)
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
                .find(plausible)
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
