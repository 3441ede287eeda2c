//! Facet selections driving the filter engine.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Record;

/// Inclusive calendar-date interval.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Both endpoints are included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Selected values per facet plus a date interval.
///
/// An empty value set matches every record (wildcard), never nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub authors: BTreeSet<String>,
    pub policy_areas: BTreeSet<String>,
    pub enactment_methods: BTreeSet<String>,
    pub range: DateRange,
}

impl FacetSelection {
    /// Wildcard selection over `range`.
    pub fn new(range: DateRange) -> Self {
        Self {
            authors: BTreeSet::new(),
            policy_areas: BTreeSet::new(),
            enactment_methods: BTreeSet::new(),
            range,
        }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_policy_areas<I, S>(mut self, policy_areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy_areas = policy_areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_enactment_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enactment_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// AND across facets, OR within a facet, inclusive date bounds.
    pub fn matches(&self, record: &Record) -> bool {
        facet_matches(&self.authors, record.author.as_deref())
            && facet_matches(&self.policy_areas, record.policy_area.as_deref())
            && facet_matches(&self.enactment_methods, record.enactment_method.as_deref())
            && record.date.is_some_and(|d| self.range.contains(d))
    }
}

fn facet_matches(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    value.is_some_and(|v| selected.contains(v))
}

/// Primary facet of a basic (single-facet) search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Author,
    EnactmentMethod,
    PolicyArea,
    DateRange,
}

/// Basic search: one facet constrained, everything else wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicSearch {
    pub mode: SearchMode,
    #[serde(default)]
    pub values: Vec<String>,
    /// Only consulted in [`SearchMode::DateRange`].
    #[serde(default)]
    pub range: Option<DateRange>,
}

impl BasicSearch {
    /// Expand into a full selection; `full_range` is the observed date range.
    pub fn into_selection(self, full_range: DateRange) -> FacetSelection {
        let selection = FacetSelection::new(full_range);
        match self.mode {
            SearchMode::Author => selection.with_authors(self.values),
            SearchMode::EnactmentMethod => selection.with_enactment_methods(self.values),
            SearchMode::PolicyArea => selection.with_policy_areas(self.values),
            SearchMode::DateRange => selection.with_range(self.range.unwrap_or(full_range)),
        }
    }
}
