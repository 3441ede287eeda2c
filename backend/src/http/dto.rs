//! Request and response bodies for the HTTP API.
//!
//! View DTOs are re-exported from [`crate::api`]; this module only adds the
//! request shapes and the health response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    DatasetInfo, FacetIndex, FlowDiagram, RelationshipGraph, ResultsTable, ScatterData,
    TimelineData, YearlyCounts,
};
use crate::api::{BasicSearch, DateRange, FacetSelection, SearchMode};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "loaded" or "not_loaded"
    pub dataset: String,
    /// Working-set size when a snapshot is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
}

/// Advanced filter selection.
///
/// Empty value lists are wildcards; missing dates default to the observed
/// bounds of the dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub policy_areas: Vec<String>,
    #[serde(default)]
    pub enactment_methods: Vec<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Fill missing range endpoints from the facet bounds.
///
/// A defaulted endpoint never crosses the one the caller gave, so only
/// explicitly inverted ranges fail validation.
fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    index: &FacetIndex,
) -> DateRange {
    match (start, end) {
        (Some(start), Some(end)) => DateRange::new(start, end),
        (Some(start), None) => DateRange::new(start, index.date_max.max(start)),
        (None, Some(end)) => DateRange::new(index.date_min.min(end), end),
        (None, None) => index.full_range(),
    }
}

impl SelectionRequest {
    pub fn into_selection(self, index: &FacetIndex) -> FacetSelection {
        let range = resolve_range(self.start_date, self.end_date, index);
        FacetSelection::new(range)
            .with_authors(self.authors)
            .with_policy_areas(self.policy_areas)
            .with_enactment_methods(self.enactment_methods)
    }
}

/// Basic (single-facet) search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicSearchRequest {
    pub mode: SearchMode,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl BasicSearchRequest {
    pub fn into_search(self, index: &FacetIndex) -> BasicSearch {
        let range = match (self.start_date, self.end_date) {
            (None, None) => None,
            (start, end) => Some(resolve_range(start, end, index)),
        };
        BasicSearch {
            mode: self.mode,
            values: self.values,
            range,
        }
    }
}

/// Scatter view request: a selection plus the three plotted fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterRequest {
    #[serde(flatten)]
    pub selection: SelectionRequest,
    #[serde(default = "default_x_field")]
    pub x_field: String,
    #[serde(default = "default_y_field")]
    pub y_field: String,
    #[serde(default = "default_color_field")]
    pub color_field: String,
}

fn default_x_field() -> String {
    "policy_area".to_string()
}

fn default_y_field() -> String {
    "date".to_string()
}

fn default_color_field() -> String {
    "author".to_string()
}
