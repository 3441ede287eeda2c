use serde::{Deserialize, Serialize};

use crate::models::Record;

// =========================================================
// Results table types + routes
// =========================================================

/// Filtered records in order, with their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    pub total: usize,
    pub records: Vec<Record>,
}

/// Route path for advanced (multi-facet) filtering
pub const POST_RECORDS: &str = "/v1/records";

/// Route path for basic (single-facet) search
pub const POST_SEARCH: &str = "/v1/search";
