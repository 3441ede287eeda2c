use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Facet types + route
// =========================================================

/// Filter choices and observed date bounds of the working set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetIndex {
    pub authors: Vec<String>,
    pub policy_areas: Vec<String>,
    pub enactment_methods: Vec<String>,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
}

/// Facet value sets without date bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValues {
    pub authors: Vec<String>,
    pub policy_areas: Vec<String>,
    pub enactment_methods: Vec<String>,
}

/// Route path for the facet index
pub const GET_FACETS: &str = "/v1/facets";
